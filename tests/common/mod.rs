// Shared fixtures for the integration tests
#![allow(dead_code)]

use std::sync::{Mutex, Once};

use log::{Level, LevelFilter, Log, Metadata, Record};

/// Logger that keeps every record so tests can assert on logged errors
struct CaptureLogger {
    records: Mutex<Vec<(Level, String)>>,
}

impl Log for CaptureLogger {
    fn enabled(&self, _metadata: &Metadata) -> bool {
        true
    }

    fn log(&self, record: &Record) {
        if let Ok(mut records) = self.records.lock() {
            records.push((record.level(), record.args().to_string()));
        }
    }

    fn flush(&self) {}
}

static LOGGER: CaptureLogger = CaptureLogger {
    records: Mutex::new(Vec::new()),
};
static INIT: Once = Once::new();

pub fn init_logger() {
    INIT.call_once(|| {
        log::set_logger(&LOGGER).expect("logger installed twice");
        log::set_max_level(LevelFilter::Trace);
    });
}

/// True if a record at `level` mentioning `needle` was logged.
///
/// Tests run in parallel, so `needle` should be unique to the test.
pub fn logged(level: Level, needle: &str) -> bool {
    LOGGER
        .records
        .lock()
        .expect("log records poisoned")
        .iter()
        .any(|(l, message)| *l == level && message.contains(needle))
}

/// One pet list entry as the shop application writes it
pub fn pet_xml(tag: &str, species: &str, name: &str, age: &str, color: &str, gender: &str, price: &str) -> String {
    format!(
        "<{tag}>\n\t<species>{species}</species>\n\t<name>{name}</name>\n\t<age>{age}</age>\n\
         \t<color>{color}</color>\n\t<gender>{gender}</gender>\n\t<price>{price}</price>\n</{tag}>\n"
    )
}

/// A complete pet list document around the given entries
pub fn pets_document(entries: &[String]) -> String {
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<pets>\n{}</pets>\n",
        entries.concat()
    )
}
