use crate::data::loader::parse_listings;
use crate::data::{DayType, ListingTable};
use astra::{Body, Request, Response};
use http::Method;
use std::io::Read;

/// Weekday source: 3 rows.
pub const WEEKDAYS_CSV: &str = "\
,realSum,room_type,room_shared,room_private,person_capacity,host_is_superhost,multi,biz,cleanliness_rating,guest_satisfaction_overall,bedrooms,dist,metro_dist,attr_index,attr_index_norm,rest_index,rest_index_norm,lng,lat
0,570.0,Entire home/apt,False,False,2.0,False,0,1,10.0,98.0,1,5.0,1.58,235.1,16.8,508.6,9.3,-0.05,51.52
1,300.0,Private room,False,True,2.0,True,1,0,9.0,92.0,1,2.0,0.72,404.9,28.9,1133.8,20.7,-0.08,51.51
2,150.0,Private room,False,True,1.0,False,0,0,8.0,80.0,1,12.0,1.10,100.0,8.0,300.0,5.0,-0.20,51.45
";

/// Weekend source: 2 rows.
pub const WEEKENDS_CSV: &str = "\
,realSum,room_type,room_shared,room_private,person_capacity,host_is_superhost,multi,biz,cleanliness_rating,guest_satisfaction_overall,bedrooms,dist,metro_dist,attr_index,attr_index_norm,rest_index,rest_index_norm,lng,lat
0,800.0,Entire home/apt,False,False,4.0,True,0,1,10.0,100.0,2,1.0,0.30,500.0,35.0,1500.0,27.0,-0.12,51.50
1,90.0,Shared room,True,False,1.0,False,1,0,7.0,70.0,1,8.0,2.00,90.0,6.0,250.0,4.0,0.01,51.55
";

/// Base table built the same way start-up builds it, from in-memory sources.
pub fn test_table() -> ListingTable {
    let mut rows = parse_listings(WEEKDAYS_CSV.as_bytes(), DayType::Weekday, "weekdays")
        .unwrap_or_else(|e| panic!("weekday fixture failed to parse: {e}"));
    rows.extend(
        parse_listings(WEEKENDS_CSV.as_bytes(), DayType::Weekend, "weekends")
            .unwrap_or_else(|e| panic!("weekend fixture failed to parse: {e}")),
    );
    ListingTable::new(rows)
}

pub fn get(uri: &str) -> Request {
    http::Request::builder()
        .method(Method::GET)
        .uri(uri)
        .body(Body::empty())
        .unwrap()
}

pub fn body_string(resp: Response) -> String {
    let mut body = String::new();
    resp.into_body().reader().read_to_string(&mut body).unwrap();
    body
}

pub fn body_bytes(resp: Response) -> Vec<u8> {
    let mut body = Vec::new();
    resp.into_body().reader().read_to_end(&mut body).unwrap();
    body
}
