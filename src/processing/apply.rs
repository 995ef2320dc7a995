//! Applying aggregated groups to a container.

use crate::container::Container;
use crate::error::{ConvertError, Result};
use crate::models::{Action, Entry, IpTypeFilter};
use std::collections::HashMap;

/// Add or remove every group of `entries` on `container`.
///
/// Groups are independent, so the iteration order is not meaningful. A failed
/// add stops the run and groups applied before it stay applied.
pub fn apply(
    entries: &HashMap<String, Entry>,
    action: Action,
    filter: IpTypeFilter,
    container: &mut dyn Container,
) -> Result<()> {
    log::info!(
        "Applying {} groups: action={action} filter={filter:?}",
        entries.len()
    );
    for (name, entry) in entries {
        match action {
            Action::Add => {
                container
                    .add(entry, filter)
                    .map_err(|source| ConvertError::Container {
                        name: name.clone(),
                        source,
                    })?;
            }
            Action::Remove => container.remove(name, filter),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::ContainerError;

    /// Records every call; fails adds for the group named in `fail_on`.
    #[derive(Default)]
    struct Recorder {
        added: Vec<(Entry, IpTypeFilter)>,
        removed: Vec<(String, IpTypeFilter)>,
        fail_on: Option<String>,
    }

    impl Container for Recorder {
        fn add(
            &mut self,
            entry: &Entry,
            filter: IpTypeFilter,
        ) -> std::result::Result<(), ContainerError> {
            if self.fail_on.as_deref() == Some(entry.name()) {
                return Err(format!("refusing {}", entry.name()).into());
            }
            self.added.push((entry.clone(), filter));
            Ok(())
        }

        fn remove(&mut self, name: &str, filter: IpTypeFilter) {
            self.removed.push((name.to_string(), filter));
        }
    }

    fn sample_entries() -> HashMap<String, Entry> {
        let mut cn = Entry::new("CN");
        cn.add_range("1.0.0.0", "1.0.0.255").unwrap();
        let mut na = Entry::new("NA");
        na.add_range("8.8.8.0", "8.8.8.255").unwrap();
        HashMap::from([("CN".to_string(), cn), ("NA".to_string(), na)])
    }

    #[test]
    fn test_apply_add() {
        let mut rec = Recorder::default();
        apply(&sample_entries(), Action::Add, IpTypeFilter::V4Only, &mut rec).unwrap();
        assert_eq!(rec.added.len(), 2);
        assert!(rec.removed.is_empty());
        assert!(rec.added.iter().all(|(_, f)| *f == IpTypeFilter::V4Only));
        let mut names: Vec<&str> = rec.added.iter().map(|(e, _)| e.name()).collect();
        names.sort();
        assert_eq!(names, vec!["CN", "NA"]);
    }

    #[test]
    fn test_apply_remove() {
        let mut rec = Recorder::default();
        apply(&sample_entries(), Action::Remove, IpTypeFilter::None, &mut rec).unwrap();
        assert!(rec.added.is_empty());
        let mut names: Vec<&str> = rec.removed.iter().map(|(n, _)| n.as_str()).collect();
        names.sort();
        assert_eq!(names, vec!["CN", "NA"]);
    }

    #[test]
    fn test_apply_add_failure_stops() {
        let mut rec = Recorder {
            fail_on: Some("CN".to_string()),
            ..Default::default()
        };
        let err = apply(&sample_entries(), Action::Add, IpTypeFilter::None, &mut rec).unwrap_err();
        match err {
            ConvertError::Container { name, source } => {
                assert_eq!(name, "CN");
                assert_eq!(source.to_string(), "refusing CN");
            }
            other => panic!("unexpected {other:?}"),
        }
        // NA may or may not have been applied first, but nothing after CN was
        assert!(rec.added.len() <= 1);
        assert!(rec.added.iter().all(|(e, _)| e.name() == "NA"));
    }

    #[test]
    fn test_apply_empty() {
        let mut rec = Recorder::default();
        apply(&HashMap::new(), Action::Add, IpTypeFilter::None, &mut rec).unwrap();
        assert!(rec.added.is_empty());
    }
}
