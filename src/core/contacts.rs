use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::models::Contact;
use crate::store::{ContactStore, activity};
use crate::ui::messages::{info, success, warning};
use crate::utils::table::Table;

/// High-level logic for the `contacts` command family.
pub struct ContactLogic;

impl ContactLogic {
    fn store(cfg: &Config) -> AppResult<ContactStore> {
        let store = ContactStore::new(cfg);
        store.ensure_exists()?;
        Ok(store)
    }

    pub fn add(cfg: &Config, name: &str, phone: &str, email: &str) -> AppResult<Contact> {
        let contact = Contact::new(name, phone, email);
        if contact.name.is_empty() {
            return Err(AppError::EmptyInput("Contact name"));
        }

        let store = Self::store(cfg)?;
        let mut contacts = store.load()?;
        if contacts.iter().any(|c| c.matches(&contact.name)) {
            return Err(AppError::DuplicateContact(contact.name));
        }

        contacts.push(contact.clone());
        store.save(&contacts)?;

        success(format!("Contact '{}' added.", contact.name));
        activity::record(cfg, "contacts", "add", &contact.name);
        Ok(contact)
    }

    pub fn table(contacts: &[Contact]) -> String {
        let mut table = Table::new(&["Name", "Phone", "Email"]);
        for c in contacts {
            table.add_row(vec![c.name.clone(), c.phone.clone(), c.email.clone()]);
        }
        table.render()
    }

    pub fn list(cfg: &Config) -> AppResult<Vec<Contact>> {
        let contacts = Self::store(cfg)?.load()?;
        if contacts.is_empty() {
            info("No contacts found.");
        } else {
            print!("{}", Self::table(&contacts));
        }
        Ok(contacts)
    }

    pub fn search(cfg: &Config, name: &str) -> AppResult<Contact> {
        let contacts = Self::store(cfg)?.load()?;
        let found = contacts
            .into_iter()
            .find(|c| c.matches(name))
            .ok_or_else(|| AppError::ContactNotFound(name.trim().to_string()))?;

        print!("{}", Self::table(std::slice::from_ref(&found)));
        Ok(found)
    }

    /// Fields left as `None` keep their current value.
    pub fn update(
        cfg: &Config,
        name: &str,
        phone: Option<&str>,
        email: Option<&str>,
    ) -> AppResult<Contact> {
        let store = Self::store(cfg)?;
        let mut contacts = store.load()?;

        let contact = contacts
            .iter_mut()
            .find(|c| c.matches(name))
            .ok_or_else(|| AppError::ContactNotFound(name.trim().to_string()))?;

        if let Some(p) = phone {
            contact.phone = p.trim().to_string();
        }
        if let Some(e) = email {
            contact.email = e.trim().to_string();
        }
        let updated = contact.clone();

        store.save(&contacts)?;
        success(format!("Contact '{}' updated.", updated.name));
        activity::record(cfg, "contacts", "update", &updated.name);
        Ok(updated)
    }

    pub fn delete(cfg: &Config, name: &str) -> AppResult<()> {
        let store = Self::store(cfg)?;
        let mut contacts = store.load()?;
        let before = contacts.len();
        contacts.retain(|c| !c.matches(name));

        if contacts.len() == before {
            return Err(AppError::ContactNotFound(name.trim().to_string()));
        }

        store.save(&contacts)?;
        success(format!("Contact '{}' deleted.", name.trim()));
        activity::record(cfg, "contacts", "delete", name.trim());
        Ok(())
    }

    pub fn export_json(cfg: &Config) -> AppResult<usize> {
        let store = Self::store(cfg)?;
        let contacts = store.load()?;
        if contacts.is_empty() {
            info("No contacts found. Nothing exported.");
            return Ok(0);
        }
        store.export_json(&contacts)?;

        success(format!(
            "{} contact(s) exported to '{}'.",
            contacts.len(),
            store.json_path().display()
        ));
        activity::record(cfg, "contacts", "export-json", &store.json_path().to_string_lossy());
        Ok(contacts.len())
    }

    /// Show the contacts stored in the JSON file; the CSV is left untouched.
    /// A missing JSON file only warns.
    pub fn import_json(cfg: &Config) -> AppResult<Vec<Contact>> {
        let store = Self::store(cfg)?;
        let Some(contacts) = store.import_json()? else {
            warning(format!(
                "JSON file '{}' not found. Nothing imported.",
                store.json_path().display()
            ));
            return Ok(Vec::new());
        };

        success(format!(
            "{} contact(s) loaded from '{}'.",
            contacts.len(),
            store.json_path().display()
        ));
        if !contacts.is_empty() {
            print!("{}", Self::table(&contacts));
        }
        Ok(contacts)
    }
}
