// tests/common/mod.rs
//
// Small fixture shaped like the published dataset: extra columns, a town
// appearing twice, null cells, and a quoted town name with a comma.
#![allow(dead_code)]

use tourism_dash::data::Table;

pub const FIXTURE: &str = "\
refArea,Town,Total number of guest houses,Total number of hotels,Total number of restaurants,Total number of cafes,Existence of hotels - does not exist,Tourism Index,Observation URI
http://dbpedia.org/resource/Batroun,Batroun,10,5,40,20,0,8,obs-1
http://dbpedia.org/resource/Byblos,Byblos,6,7,30,15,0,8,obs-2
http://dbpedia.org/resource/Tyre,Tyre,4,0,12,0,1,3,obs-3
http://dbpedia.org/resource/Batroun,Batroun,2,1,5,,0,5,obs-4
http://dbpedia.org/resource/Zahle,Zahle,0,3,25,8,0,6,obs-5
http://dbpedia.org/resource/Deir_el_Qamar,\"Deir el Qamar, Chouf\",3,0,4,0,1,1,obs-6
http://dbpedia.org/resource/Hermel,Hermel,,0,0,0,1,0,obs-7
";

pub fn table() -> Table {
    Table::from_csv(FIXTURE).expect("fixture parses")
}

pub fn towns(names: &[&str]) -> Vec<String> {
    names.iter().map(|s| s.to_string()).collect()
}
