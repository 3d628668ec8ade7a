use crate::core::assigner::assign_numbers;
use crate::core::layout::{plan_pages, LayoutConfig};
use crate::core::render::{today_stamp, TicketRenderer, TicketStyle};
use crate::core::roster::{assignments_to_csv, read_identifiers};
use crate::core::{ConfigProvider, Page, Result, RunSummary, Storage};
use crate::utils::error::RaffleError;
use rand::Rng;

/// Runs one raffle: read identifiers, draw numbers, lay out pages, write the document.
///
/// Everything is built in memory first; nothing is written unless every earlier step succeeded.
pub struct RaffleEngine<S: Storage, C: ConfigProvider> {
    storage: S,
    config: C,
    layout: LayoutConfig,
    style: TicketStyle,
    date: String,
}

impl<S: Storage, C: ConfigProvider> RaffleEngine<S, C> {
    pub fn new(storage: S, config: C) -> Self {
        Self {
            storage,
            config,
            layout: LayoutConfig::default(),
            style: TicketStyle::default(),
            date: today_stamp(),
        }
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.layout = layout;
        self
    }

    pub fn with_style(mut self, style: TicketStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = date.into();
        self
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn run(&self) -> Result<RunSummary> {
        let mut rng = rand::rng();
        self.run_with_rng(&mut rng)
    }

    pub fn run_with_rng<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<RunSummary> {
        let input_path = self.config.input_path();
        let output_path = self.config.output_path();
        let organization = self.config.organization();

        println!("Reading identifiers from {}...", input_path);
        let data = self.storage.read_file(input_path)?;
        let identifiers = read_identifiers(&data, self.config.has_header())?;
        if identifiers.is_empty() {
            return Err(RaffleError::EmptyInput {
                origin: input_path.to_string(),
            });
        }
        println!("Found {} identifiers", identifiers.len());

        println!("Assigning numbers...");
        let assignments = assign_numbers(&identifiers, rng)?;
        let numbers: Vec<u32> = assignments.iter().map(|a| a.number).collect();

        let pages = plan_pages(&numbers, &self.layout);
        let tickets: usize = pages.iter().map(Page::ticket_count).sum();
        println!("Rendering {} tickets on {} pages...", tickets, pages.len());

        let renderer = TicketRenderer::new(self.style.clone(), self.layout);
        let document = renderer.render_document(&pages, organization, &self.date);

        let assignments_file = match self.config.assignments_path() {
            Some(path) => Some((path, assignments_to_csv(&assignments, organization)?)),
            None => None,
        };

        // assignments go first: tickets must never exist without their number mapping
        if let Some((path, csv)) = &assignments_file {
            tracing::debug!("Writing {} assignments to {}", assignments.len(), path);
            self.storage.write_file(path, csv)?;
        }

        tracing::debug!("Writing {} bytes to {}", document.len(), output_path);
        if let Err(e) = self.storage.write_file(output_path, document.as_bytes()) {
            if let Some((path, _)) = &assignments_file {
                if let Err(cleanup) = self.storage.remove_file(path) {
                    tracing::warn!("Could not remove {} after failed run: {}", path, cleanup);
                }
            }
            return Err(e);
        }

        Ok(RunSummary {
            identifiers: identifiers.len(),
            tickets,
            pages: pages.len(),
            output_path: output_path.to_string(),
            assignments_path: assignments_file.map(|(path, _)| path.to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::collections::{HashMap, HashSet};

    struct MockStorage {
        files: RefCell<HashMap<String, Vec<u8>>>,
        unwritable: HashSet<String>,
    }

    impl MockStorage {
        fn with_input(path: &str, content: &str) -> Self {
            let mut files = HashMap::new();
            files.insert(path.to_string(), content.as_bytes().to_vec());
            Self {
                files: RefCell::new(files),
                unwritable: HashSet::new(),
            }
        }

        fn get_file(&self, path: &str) -> Option<Vec<u8>> {
            self.files.borrow().get(path).cloned()
        }
    }

    impl Storage for MockStorage {
        fn read_file(&self, path: &str) -> Result<Vec<u8>> {
            self.get_file(path).ok_or_else(|| RaffleError::MissingFile {
                path: path.to_string(),
            })
        }

        fn write_file(&self, path: &str, data: &[u8]) -> Result<()> {
            if self.unwritable.contains(path) {
                return Err(RaffleError::WriteError {
                    path: path.to_string(),
                    source: std::io::Error::from(std::io::ErrorKind::PermissionDenied),
                });
            }
            self.files.borrow_mut().insert(path.to_string(), data.to_vec());
            Ok(())
        }

        fn remove_file(&self, path: &str) -> Result<()> {
            self.files.borrow_mut().remove(path);
            Ok(())
        }
    }

    struct TestConfig {
        assignments: Option<String>,
    }

    impl ConfigProvider for TestConfig {
        fn input_path(&self) -> &str {
            "emails.csv"
        }

        fn output_path(&self) -> &str {
            "tickets.html"
        }

        fn assignments_path(&self) -> Option<&str> {
            self.assignments.as_deref()
        }

        fn organization(&self) -> &str {
            "Chess Club"
        }

        fn has_header(&self) -> bool {
            false
        }
    }

    fn roster(count: usize) -> String {
        (1..=count).map(|i| format!("p{}@example.com\n", i)).collect()
    }

    #[test]
    fn test_run_writes_document_and_assignments() {
        let storage = MockStorage::with_input("emails.csv", &roster(23));
        let config = TestConfig {
            assignments: Some("assignments.csv".to_string()),
        };
        let engine = RaffleEngine::new(storage, config).with_date("2024.05.01");

        let summary = engine.run().unwrap();
        assert_eq!(summary.identifiers, 23);
        assert_eq!(summary.tickets, 23);
        assert_eq!(summary.pages, 3);
        assert_eq!(summary.assignments_path.as_deref(), Some("assignments.csv"));

        let html = String::from_utf8(engine.storage().get_file("tickets.html").unwrap()).unwrap();
        assert_eq!(html.matches("<section class=\"page\">").count(), 3);
        assert!(html.contains(">2024.05.01<"));

        let csv = String::from_utf8(engine.storage().get_file("assignments.csv").unwrap()).unwrap();
        assert_eq!(csv.lines().count(), 24);
    }

    #[test]
    fn test_assignments_file_is_optional() {
        let storage = MockStorage::with_input("emails.csv", &roster(3));
        let engine = RaffleEngine::new(storage, TestConfig { assignments: None });

        let summary = engine.run().unwrap();
        assert!(summary.assignments_path.is_none());
        assert_eq!(engine.storage().files.borrow().len(), 2);
    }

    #[test]
    fn test_empty_input_writes_nothing() {
        let storage = MockStorage::with_input("emails.csv", "\n  \n");
        let config = TestConfig {
            assignments: Some("assignments.csv".to_string()),
        };
        let engine = RaffleEngine::new(storage, config);

        let result = engine.run();
        assert!(matches!(result, Err(RaffleError::EmptyInput { .. })));
        assert!(engine.storage().get_file("tickets.html").is_none());
        assert!(engine.storage().get_file("assignments.csv").is_none());
    }

    #[test]
    fn test_missing_input() {
        let storage = MockStorage::with_input("other.csv", "a@example.com\n");
        let engine = RaffleEngine::new(storage, TestConfig { assignments: None });

        assert!(matches!(engine.run(), Err(RaffleError::MissingFile { .. })));
    }

    #[test]
    fn test_unwritable_output() {
        let mut storage = MockStorage::with_input("emails.csv", &roster(5));
        storage.unwritable.insert("tickets.html".to_string());
        let engine = RaffleEngine::new(storage, TestConfig { assignments: None });

        let error = engine.run().unwrap_err();
        assert!(matches!(error, RaffleError::WriteError { ref path, .. } if path == "tickets.html"));
    }

    #[test]
    fn test_unwritable_assignments_leave_no_document() {
        let mut storage = MockStorage::with_input("emails.csv", &roster(5));
        storage.unwritable.insert("assignments.csv".to_string());
        let config = TestConfig {
            assignments: Some("assignments.csv".to_string()),
        };
        let engine = RaffleEngine::new(storage, config);

        let error = engine.run().unwrap_err();
        assert!(matches!(error, RaffleError::WriteError { ref path, .. } if path == "assignments.csv"));
        assert!(engine.storage().get_file("tickets.html").is_none());
    }

    #[test]
    fn test_unwritable_document_removes_assignments() {
        let mut storage = MockStorage::with_input("emails.csv", &roster(5));
        storage.unwritable.insert("tickets.html".to_string());
        let config = TestConfig {
            assignments: Some("assignments.csv".to_string()),
        };
        let engine = RaffleEngine::new(storage, config);

        assert!(matches!(engine.run(), Err(RaffleError::WriteError { .. })));
        assert!(engine.storage().get_file("assignments.csv").is_none());
        assert!(engine.storage().get_file("tickets.html").is_none());
    }

    #[test]
    fn test_custom_layout_changes_page_count() {
        let storage = MockStorage::with_input("emails.csv", &roster(23));
        let engine = RaffleEngine::new(storage, TestConfig { assignments: None })
            .with_layout(LayoutConfig { rows: 4, columns: 3 });

        let summary = engine.run().unwrap();
        assert_eq!(summary.pages, 2);
    }
}
