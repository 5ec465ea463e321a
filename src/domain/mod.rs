pub mod tags;
pub mod track;
pub mod track_type;
