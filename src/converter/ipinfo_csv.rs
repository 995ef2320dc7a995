//! Converter for the ipinfo country/continent CSV.

use super::InputConverter;
use crate::container::Container;
use crate::error::{ConvertError, Result};
use crate::models::{Action, Entry, IpTypeFilter};
use crate::processing::{aggregate, apply, WantSet};
use crate::source::read_records;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

/// Registry name of this converter.
pub const IPINFO_CSV_TYPE: &str = "ipinfoCSV";
pub const IPINFO_CSV_DESCRIPTION: &str =
    "Convert ipinfo country/continent CSV data to other formats";

/// Source file used when the args name none.
pub fn default_file() -> PathBuf {
    Path::new("ipinfo").join("country.csv")
}

/// JSON args of the converter. Every field is optional and `null` counts as
/// absent.
#[derive(Deserialize, Debug, Default)]
#[serde(default)]
struct Args {
    file: Option<String>,
    #[serde(rename = "wantedList")]
    wanted_list: Option<Vec<String>>,
    #[serde(rename = "onlyIPType")]
    only_ip_type: Option<IpTypeFilter>,
}

/// Reads the ipinfo country CSV and applies its groups to a container.
#[derive(Debug, Clone)]
pub struct IpinfoCsv {
    action: Action,
    file: PathBuf,
    want: WantSet,
    filter: IpTypeFilter,
}

impl IpinfoCsv {
    /// Build from the converter's JSON args. `None` or `null` uses defaults.
    pub fn new(action: Action, args: Option<&serde_json::Value>) -> Result<IpinfoCsv> {
        let args: Args = match args {
            None | Some(serde_json::Value::Null) => Args::default(),
            Some(value) => {
                serde_path_to_error::deserialize(value).map_err(ConvertError::from_json_path)?
            }
        };

        let file = match args.file {
            Some(file) if !file.is_empty() => PathBuf::from(file),
            _ => default_file(),
        };

        Ok(IpinfoCsv {
            action,
            file,
            want: WantSet::new(args.wanted_list.unwrap_or_default()),
            filter: args.only_ip_type.unwrap_or_default(),
        })
    }

    pub fn file(&self) -> &Path {
        &self.file
    }

    pub fn want(&self) -> &WantSet {
        &self.want
    }

    pub fn filter(&self) -> IpTypeFilter {
        self.filter
    }

    /// Read the source and build the per-group entries.
    pub fn entries(&self) -> Result<HashMap<String, Entry>> {
        let records = read_records(&self.file)?;
        aggregate(&records, &self.want)
    }
}

impl InputConverter for IpinfoCsv {
    fn kind(&self) -> &str {
        IPINFO_CSV_TYPE
    }

    fn action(&self) -> Action {
        self.action
    }

    fn description(&self) -> &str {
        IPINFO_CSV_DESCRIPTION
    }

    fn input(&self, container: &mut dyn Container) -> Result<()> {
        log::info!("process ipinfo: {}", self.file.display());
        let entries = self.entries()?;
        apply(&entries, self.action, self.filter, container)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::MemoryContainer;
    use serde_json::json;

    #[test]
    fn test_new_defaults() {
        let conv = IpinfoCsv::new(Action::Add, None).unwrap();
        assert_eq!(conv.file(), Path::new("ipinfo/country.csv"));
        assert!(conv.want().is_empty());
        assert_eq!(conv.filter(), IpTypeFilter::None);

        let conv = IpinfoCsv::new(Action::Add, Some(&json!(null))).unwrap();
        assert_eq!(conv.file(), default_file());

        let conv = IpinfoCsv::new(Action::Add, Some(&json!({"file": ""}))).unwrap();
        assert_eq!(conv.file(), default_file());
    }

    #[test]
    fn test_new_with_args() {
        let args = json!({
            "file": "data/country.csv",
            "wantedList": ["cn", " sg", ""],
            "onlyIPType": "ipv6"
        });
        let conv = IpinfoCsv::new(Action::Remove, Some(&args)).unwrap();
        assert_eq!(conv.file(), Path::new("data/country.csv"));
        assert_eq!(conv.want().len(), 2);
        assert!(conv.want().accepts("SG"));
        assert_eq!(conv.filter(), IpTypeFilter::V6Only);
        assert_eq!(conv.action(), Action::Remove);
        assert_eq!(conv.kind(), "ipinfoCSV");
    }

    #[test]
    fn test_new_unknown_ip_type_means_no_filter() {
        let conv = IpinfoCsv::new(Action::Add, Some(&json!({"onlyIPType": "both"}))).unwrap();
        assert_eq!(conv.filter(), IpTypeFilter::None);
        let conv = IpinfoCsv::new(Action::Add, Some(&json!({"onlyIPType": "IPv4"}))).unwrap();
        assert_eq!(conv.filter(), IpTypeFilter::None);
    }

    #[test]
    fn test_new_null_fields_use_defaults() {
        let args = json!({"file": null, "wantedList": null, "onlyIPType": null});
        let conv = IpinfoCsv::new(Action::Add, Some(&args)).unwrap();
        assert_eq!(conv.file(), default_file());
        assert!(conv.want().is_empty());
        assert_eq!(conv.filter(), IpTypeFilter::None);
    }

    #[test]
    fn test_new_blank_file_is_kept() {
        let conv = IpinfoCsv::new(Action::Add, Some(&json!({"file": " "}))).unwrap();
        assert_eq!(conv.file(), Path::new(" "));
    }

    #[test]
    fn test_new_bad_args() {
        let err = IpinfoCsv::new(Action::Add, Some(&json!({"wantedList": "CN"}))).unwrap_err();
        match err {
            ConvertError::ConfigJson { path, .. } => assert_eq!(path, "wantedList"),
            other => panic!("unexpected {other:?}"),
        }
        assert!(IpinfoCsv::new(Action::Add, Some(&json!([1, 2]))).is_err());
    }

    #[test]
    fn test_input_add_sample() {
        let args = json!({"file": "src/tests/test_data/country_sample.csv"});
        let conv = IpinfoCsv::new(Action::Add, Some(&args)).unwrap();
        let mut container = MemoryContainer::new();
        conv.input(&mut container).unwrap();
        let names: Vec<&str> = container.groups().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["CN", "EU", "NA", "OC", "SG"]);
        assert_eq!(container.get("SG").unwrap().v4.len(), 2);
        assert_eq!(container.get("SG").unwrap().v6.len(), 1);
    }

    #[test]
    fn test_input_add_v4_only_with_want() {
        let args = json!({
            "file": "src/tests/test_data/country_sample.csv",
            "wantedList": ["SG", "EU"],
            "onlyIPType": "ipv4"
        });
        let conv = IpinfoCsv::new(Action::Add, Some(&args)).unwrap();
        let mut container = MemoryContainer::new();
        conv.input(&mut container).unwrap();
        let names: Vec<&str> = container.groups().map(|(k, _)| k).collect();
        assert_eq!(names, vec!["EU", "SG"]);
        assert!(container.groups().all(|(_, g)| g.v6.is_empty()));
    }

    #[test]
    fn test_input_remove_on_empty_container() {
        let args = json!({"file": "src/tests/test_data/country_sample.csv"});
        let conv = IpinfoCsv::new(Action::Remove, Some(&args)).unwrap();
        let mut container = MemoryContainer::new();
        conv.input(&mut container).unwrap();
        assert!(container.is_empty());
    }

    #[test]
    fn test_input_bad_range_leaves_container_untouched() {
        let args = json!({"file": "src/tests/test_data/country_bad_range.csv"});
        let conv = IpinfoCsv::new(Action::Add, Some(&args)).unwrap();
        let mut container = MemoryContainer::new();
        let err = conv.input(&mut container).unwrap_err();
        assert!(matches!(err, ConvertError::Range { .. }));
        assert!(container.is_empty());
    }

    #[test]
    fn test_input_missing_file() {
        let args = json!({"file": "src/tests/test_data/missing.csv"});
        let conv = IpinfoCsv::new(Action::Add, Some(&args)).unwrap();
        let mut container = MemoryContainer::new();
        let err = conv.input(&mut container).unwrap_err();
        assert!(matches!(err, ConvertError::SourceOpen { .. }));
    }
}
