#![cfg(feature = "serde")]
#![allow(clippy::unwrap_used)]

use kmlsurvey::{extract_geometry, summarize};

#[test]
fn test_summary_serializes_as_flat_map() {
    let summary = summarize("<kml><Placemark/></kml>").unwrap();
    let json = serde_json::to_value(&summary).unwrap();
    assert_eq!(json["Placemark"], 1);
    assert_eq!(json["Folder"], 0);
    assert_eq!(json.as_object().unwrap().len(), 7);
}

#[test]
fn test_extraction_serializes_records() {
    let kml = "<kml><Placemark><LineString>\
         <coordinates>3,4 oops</coordinates>\
       </LineString></Placemark></kml>";
    let extraction = extract_geometry(kml).unwrap();
    let json = serde_json::to_value(&extraction).unwrap();

    assert_eq!(json["geometries"][0]["kind"], "LineString");
    assert_eq!(json["geometries"][0]["coordinates"][0]["lat"], 4.0);
    assert_eq!(json["geometries"][0]["coordinates"][0]["lon"], 3.0);
    assert_eq!(json["details"][0]["length_km"], 0.0);
    assert_eq!(json["warnings"][0]["token"], "oops");
}
