//! Black-box test: uses the public API the way a consuming domain crate would,
//! pairing a string-backed domain primitive with a paged repository listing.

use keel_core::value_object::{self, Component};
use keel_core::{KernelError, Page, PageSource, PageSpec, StringValue, ValueObject};

/// A domain primitive a downstream crate would define.
#[derive(Debug, Clone)]
struct Email(StringValue);

impl Email {
    fn new(raw: &str) -> Self {
        Self(StringValue::new(raw))
    }
}

impl ValueObject for Email {
    fn equality_components(&self) -> Vec<&dyn Component> {
        self.0.equality_components()
    }
}

/// A repository-shaped source: ordered, countable, sliceable.
struct CustomerDirectory {
    emails: Vec<Email>,
}

impl PageSource for CustomerDirectory {
    type Item = Email;

    fn count(&self) -> u64 {
        self.emails.len() as u64
    }

    fn window(&self, offset: u64, limit: u64) -> Vec<Email> {
        self.emails
            .iter()
            .skip(offset as usize)
            .take(limit as usize)
            .cloned()
            .collect()
    }
}

fn directory(n: usize) -> CustomerDirectory {
    CustomerDirectory {
        emails: (0..n).map(|i| Email::new(&format!("user{i:03}@example.com"))).collect(),
    }
}

#[test]
fn domain_primitives_compare_by_value() {
    let a = Email::new("ada@example.com");
    let b = Email::new("ada@example.com");
    let c = Email::new("grace@example.com");

    assert!(value_object::equals(&a, &b).unwrap());
    assert_eq!(value_object::hash_value(&a), value_object::hash_value(&b));
    assert!(!value_object::equals(&a, &c).unwrap());
}

#[test]
fn comparing_a_primitive_against_its_backing_type_is_rejected() {
    let email = Email::new("ada@example.com");
    let bare = StringValue::new("ada@example.com");

    let err = value_object::equals(&email, &bare).unwrap_err();
    assert!(matches!(err, KernelError::InvalidComparison { .. }));
}

#[test]
fn listing_a_directory_page_reports_the_full_count() {
    let dir = directory(25);
    let page = Page::from_source(&dir, &PageSpec::new(3, 10));

    assert_eq!(page.len(), 5);
    assert_eq!(page.total(), 25);
    assert!(page.iter().all(|e| e.0.starts_with("user02")));

    let beyond = Page::from_source(&dir, &PageSpec::new(4, 10));
    assert!(beyond.is_empty());
    assert_eq!(beyond.total(), 25);
}

#[test]
fn page_of_domain_values_projects_to_display_strings() {
    let dir = directory(3);
    let page = Page::from_source(&dir, &PageSpec::new(1, 10));

    let rendered = page.map(|e| e.0.to_string());
    assert_eq!(rendered.total(), 3);
    assert_eq!(
        rendered.items(),
        [
            "user000@example.com",
            "user001@example.com",
            "user002@example.com"
        ]
    );
}
