use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Contact;
use std::fs::{self, File};
use std::path::{Path, PathBuf};

pub const CONTACT_HEADERS: [&str; 3] = ["name", "phone", "email"];

/// CSV-backed contact book with a JSON side file for export/import.
#[derive(Debug, Clone)]
pub struct ContactStore {
    csv: PathBuf,
    json: PathBuf,
}

impl ContactStore {
    pub fn new(cfg: &Config) -> Self {
        Self {
            csv: cfg.contacts_csv(),
            json: cfg.contacts_json(),
        }
    }

    pub fn csv_path(&self) -> &Path {
        &self.csv
    }

    pub fn json_path(&self) -> &Path {
        &self.json
    }

    /// Create the CSV with its header row if it does not exist yet.
    pub fn ensure_exists(&self) -> AppResult<()> {
        if self.csv.exists() {
            return Ok(());
        }
        if let Some(parent) = self.csv.parent() {
            fs::create_dir_all(parent).map_err(|e| AppError::write(parent, e))?;
        }
        self.save(&[])
    }

    pub fn load(&self) -> AppResult<Vec<Contact>> {
        self.ensure_exists()?;
        let file = File::open(&self.csv).map_err(|e| AppError::read(&self.csv, e))?;
        let mut rdr = csv::ReaderBuilder::new()
            .flexible(true)
            .trim(csv::Trim::All)
            .from_reader(file);

        let mut contacts = Vec::new();
        for row in rdr.deserialize::<Contact>() {
            let contact = row?;
            if !contact.is_blank() {
                contacts.push(contact);
            }
        }
        Ok(contacts)
    }

    /// Overwrite the CSV with `contacts`.
    pub fn save(&self, contacts: &[Contact]) -> AppResult<()> {
        let file = File::create(&self.csv).map_err(|e| AppError::write(&self.csv, e))?;
        let mut wtr = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);

        wtr.write_record(CONTACT_HEADERS)?;
        for c in contacts {
            wtr.serialize(c)?;
        }
        wtr.flush().map_err(|e| AppError::write(&self.csv, e))
    }

    pub fn export_json(&self, contacts: &[Contact]) -> AppResult<()> {
        let json = serde_json::to_string_pretty(contacts)?;
        fs::write(&self.json, json).map_err(|e| AppError::write(&self.json, e))
    }

    /// `None` when the JSON file does not exist.
    pub fn import_json(&self) -> AppResult<Option<Vec<Contact>>> {
        if !self.json.exists() {
            return Ok(None);
        }
        let text = fs::read_to_string(&self.json).map_err(|e| AppError::read(&self.json, e))?;
        Ok(Some(serde_json::from_str(&text)?))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::env;

    fn temp_store(name: &str) -> ContactStore {
        let dir = env::temp_dir().join(format!("classbook_contacts_{name}"));
        fs::remove_dir_all(&dir).ok();
        ContactStore::new(&Config {
            data_dir: dir.to_string_lossy().to_string(),
            ..Config::default()
        })
    }

    #[test]
    fn new_book_has_only_a_header() {
        let store = temp_store("header");
        assert!(store.load().unwrap().is_empty());
        assert_eq!(
            fs::read_to_string(store.csv_path()).unwrap(),
            "name,phone,email\n"
        );
    }

    #[test]
    fn contacts_survive_csv_and_json() {
        let store = temp_store("roundtrip");
        store.ensure_exists().unwrap();
        let contacts = vec![
            Contact::new("Ada Lovelace", "555-0100", "ada@example.org"),
            Contact::new("Alan, Turing", "", "alan@example.org"),
        ];
        store.save(&contacts).unwrap();
        assert_eq!(store.load().unwrap(), contacts);

        store.export_json(&contacts).unwrap();
        assert_eq!(store.import_json().unwrap(), Some(contacts));
    }
}
