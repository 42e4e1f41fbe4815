use crate::error::{Result, SolverError};
use crate::types::{Catalog, Course, CourseOffering, Instructor, Room, Section, SolverConfig, TimeSlot};
use std::fs;
use std::path::Path;

/// Loads the six catalog relations from JSON array files in `dir`, plus an
/// optional `config.toml` (§6 external interfaces). The core itself never
/// performs I/O; this is the ingestion collaborator's job, specified here
/// only for a runnable end-to-end crate.
pub fn load_catalog_from_dir(dir: &Path) -> Result<Catalog> {
    Ok(Catalog {
        courses: load_courses(&dir.join("courses.json"))?,
        rooms: load_rooms(&dir.join("rooms.json"))?,
        instructors: load_instructors(&dir.join("instructors.json"))?,
        time_slots: load_time_slots(&dir.join("timeslots.json"))?,
        sections: load_sections(&dir.join("sections.json"))?,
        offerings: load_offerings(&dir.join("offerings.json"))?,
    })
}

pub fn load_courses(path: &Path) -> Result<Vec<Course>> {
    load_json_file(path)
}

pub fn load_rooms(path: &Path) -> Result<Vec<Room>> {
    load_json_file(path)
}

pub fn load_instructors(path: &Path) -> Result<Vec<Instructor>> {
    load_json_file(path)
}

pub fn load_time_slots(path: &Path) -> Result<Vec<TimeSlot>> {
    load_json_file(path)
}

pub fn load_sections(path: &Path) -> Result<Vec<Section>> {
    load_json_file(path)
}

pub fn load_offerings(path: &Path) -> Result<Vec<CourseOffering>> {
    load_json_file(path)
}

/// Loads config from TOML, or the documented defaults if absent or
/// unparseable.
pub fn load_config_or_default(path: &Path) -> SolverConfig {
    if path.exists() {
        match fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).unwrap_or_default(),
            Err(_) => SolverConfig::default(),
        }
    } else {
        SolverConfig::default()
    }
}

fn load_json_file<T: serde::de::DeserializeOwned>(path: &Path) -> Result<T> {
    let path_str = path.display().to_string();
    let content = fs::read_to_string(path).map_err(|e| SolverError::FileRead {
        path: path_str.clone(),
        source: e,
    })?;

    serde_json::from_str(&content).map_err(|e| SolverError::JsonParse {
        file: path_str,
        message: e.to_string(),
    })
}
