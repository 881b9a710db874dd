// Copyright 2024 Google LLC
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     https://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Load the OCI configuration file.
//!
//! The OCI tools share a configuration file, by default in `~/.oci/config`.
//! The file is organized in profiles, each a section in INI format:
//!
//! ```norust
//! [DEFAULT]
//! user=ocid1.user.oc1..aaaa
//! fingerprint=12:34:56:78:90:ab:cd:ef:12:34:56:78:90:ab:cd:ef
//! key_file=~/.oci/oci_api_key.pem
//! tenancy=ocid1.tenancy.oc1..bbbb
//! region=us-ashburn-1
//!
//! [STAGING]
//! region=us-phoenix-1
//! ```
//!
//! Values missing from a profile are inherited from the `DEFAULT` profile.
//! The `OCI_CONFIG_FILE` environment variable overrides the location of the
//! file.
//!
//! # Example
//! ```
//! # use oci_auth::config::ConfigFile;
//! let config = ConfigFile::parse("[DEFAULT]\nregion=us-ashburn-1\n[STAGING]\nregion=us-phoenix-1\n")?;
//! assert_eq!(config.profile("STAGING")?.region(), Some("us-phoenix-1"));
//! # Ok::<(), oci_auth::build_errors::Error>(())
//! ```

use crate::BuildResult;
use crate::build_errors::Error as BuilderError;
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// The name of the profile used when none is specified.
pub const DEFAULT_PROFILE: &str = "DEFAULT";

/// The environment variable overriding the location of the configuration file.
pub const CONFIG_FILE_ENV: &str = "OCI_CONFIG_FILE";

const DEFAULT_LOCATION: &str = "~/.oci/config";

/// A parsed OCI configuration file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ConfigFile {
    profiles: BTreeMap<String, BTreeMap<String, String>>,
}

impl ConfigFile {
    /// The location of the configuration file.
    ///
    /// Uses the `OCI_CONFIG_FILE` environment variable, if set, and
    /// `~/.oci/config` otherwise.
    pub fn default_path() -> PathBuf {
        std::env::var(CONFIG_FILE_ENV)
            .ok()
            .filter(|v| !v.is_empty())
            .map(|v| expand_user(&v))
            .unwrap_or_else(|| expand_user(DEFAULT_LOCATION))
    }

    /// Loads the configuration file from its default location.
    pub fn load_default() -> BuildResult<Self> {
        Self::load(Self::default_path())
    }

    /// Loads a configuration file.
    pub fn load<P: AsRef<Path>>(path: P) -> BuildResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(BuilderError::loading)?;
        tracing::debug!("loaded OCI configuration from {}", path.display());
        Self::parse(&contents)
    }

    /// Parses the contents of a configuration file.
    pub fn parse(contents: &str) -> BuildResult<Self> {
        let mut profiles = BTreeMap::<String, BTreeMap<String, String>>::new();
        let mut current: Option<String> = None;
        for (number, line) in contents.lines().enumerate() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(name) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                let name = name.trim();
                if name.is_empty() {
                    return Err(BuilderError::parsing(format!(
                        "empty profile name at line {}",
                        number + 1
                    )));
                }
                profiles.entry(name.to_string()).or_default();
                current = Some(name.to_string());
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                return Err(BuilderError::parsing(format!(
                    "expected `key=value` at line {}",
                    number + 1
                )));
            };
            let Some(profile) = current.as_ref() else {
                return Err(BuilderError::parsing(format!(
                    "value outside of a profile at line {}",
                    number + 1
                )));
            };
            profiles
                .entry(profile.clone())
                .or_default()
                .insert(key.trim().to_string(), value.trim().to_string());
        }
        Ok(Self { profiles })
    }

    /// The names of the profiles in the file.
    pub fn profile_names(&self) -> impl Iterator<Item = &str> {
        self.profiles.keys().map(String::as_str)
    }

    /// Returns a profile, with the missing values taken from `DEFAULT`.
    pub fn profile(&self, name: &str) -> BuildResult<Profile> {
        let mut values = self
            .profiles
            .get(DEFAULT_PROFILE)
            .cloned()
            .unwrap_or_default();
        match self.profiles.get(name) {
            Some(p) => values.extend(p.clone()),
            None => return Err(BuilderError::unknown_profile(name)),
        };
        Ok(Profile {
            name: name.to_string(),
            values,
        })
    }
}

/// A single profile in the configuration file.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Profile {
    name: String,
    values: BTreeMap<String, String>,
}

impl Profile {
    /// The name of the profile.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the value of any key in the profile.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn user(&self) -> Option<&str> {
        self.get("user")
    }

    pub fn tenancy(&self) -> Option<&str> {
        self.get("tenancy")
    }

    pub fn fingerprint(&self) -> Option<&str> {
        self.get("fingerprint")
    }

    pub fn region(&self) -> Option<&str> {
        self.get("region")
    }

    pub fn pass_phrase(&self) -> Option<&str> {
        self.get("pass_phrase")
    }

    /// The location of the private key, with `~` expanded.
    pub fn key_file(&self) -> Option<PathBuf> {
        self.get("key_file").map(expand_user)
    }

    pub(crate) fn require(&self, key: &'static str) -> BuildResult<&str> {
        self.get(key)
            .filter(|v| !v.is_empty())
            .ok_or_else(|| BuilderError::missing_field(key))
    }
}

fn expand_user(path: &str) -> PathBuf {
    match path.strip_prefix("~/") {
        Some(rest) => match std::env::var_os("HOME") {
            Some(home) => PathBuf::from(home).join(rest),
            None => PathBuf::from(path),
        },
        None => PathBuf::from(path),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use scoped_env::ScopedEnv;
    use std::io::Write;

    type TestResult = anyhow::Result<()>;

    const CONFIG: &str = r#"
# The default profile
[DEFAULT]
user=ocid1.user.oc1..default
fingerprint = 12:34:56:78:90:ab:cd:ef:12:34:56:78:90:ab:cd:ef
key_file=~/.oci/oci_api_key.pem
tenancy=ocid1.tenancy.oc1..default
region=us-ashburn-1

; A second profile
[STAGING]
user=ocid1.user.oc1..staging
region=us-phoenix-1
"#;

    #[test]
    fn parse() -> TestResult {
        let config = ConfigFile::parse(CONFIG)?;
        let names = config.profile_names().collect::<Vec<_>>();
        assert_eq!(names, vec!["DEFAULT", "STAGING"]);

        let profile = config.profile(DEFAULT_PROFILE)?;
        assert_eq!(profile.name(), "DEFAULT");
        assert_eq!(profile.user(), Some("ocid1.user.oc1..default"));
        assert_eq!(
            profile.fingerprint(),
            Some("12:34:56:78:90:ab:cd:ef:12:34:56:78:90:ab:cd:ef")
        );
        assert_eq!(profile.tenancy(), Some("ocid1.tenancy.oc1..default"));
        assert_eq!(profile.region(), Some("us-ashburn-1"));
        assert_eq!(profile.pass_phrase(), None);
        Ok(())
    }

    #[test]
    fn inherits_default() -> TestResult {
        let config = ConfigFile::parse(CONFIG)?;
        let profile = config.profile("STAGING")?;
        assert_eq!(profile.user(), Some("ocid1.user.oc1..staging"));
        assert_eq!(profile.region(), Some("us-phoenix-1"));
        assert_eq!(profile.tenancy(), Some("ocid1.tenancy.oc1..default"));
        Ok(())
    }

    #[test]
    fn unknown_profile() -> TestResult {
        let config = ConfigFile::parse(CONFIG)?;
        let err = config.profile("PROD").unwrap_err();
        assert!(err.is_unknown_profile(), "{err:?}");
        Ok(())
    }

    #[test]
    fn parse_errors() {
        let err = ConfigFile::parse("user=abc\n").unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
        let err = ConfigFile::parse("[DEFAULT]\nnot a key value\n").unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
        assert!(err.to_string().contains("line 2"), "{err}");
        let err = ConfigFile::parse("[]\n").unwrap_err();
        assert!(err.is_parsing(), "{err:?}");
    }

    #[test]
    fn require() -> TestResult {
        let config = ConfigFile::parse("[DEFAULT]\nuser=\n")?;
        let profile = config.profile(DEFAULT_PROFILE)?;
        let err = profile.require("user").unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        let err = profile.require("tenancy").unwrap_err();
        assert!(err.is_missing_field(), "{err:?}");
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn key_file_expands_home() -> TestResult {
        let _e = ScopedEnv::set("HOME", "/home/test-user");
        let config = ConfigFile::parse(CONFIG)?;
        let profile = config.profile(DEFAULT_PROFILE)?;
        assert_eq!(
            profile.key_file(),
            Some(PathBuf::from("/home/test-user/.oci/oci_api_key.pem"))
        );
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn load_from_env() -> TestResult {
        let mut file = tempfile::NamedTempFile::new()?;
        file.write_all(CONFIG.as_bytes())?;
        let path = file.into_temp_path();
        let _e = ScopedEnv::set(CONFIG_FILE_ENV, path.to_str().unwrap());
        assert_eq!(ConfigFile::default_path(), path.to_path_buf());
        let config = ConfigFile::load_default()?;
        assert_eq!(config, ConfigFile::parse(CONFIG)?);
        Ok(())
    }

    #[test]
    #[serial_test::serial]
    fn load_missing() {
        let _e = ScopedEnv::set(CONFIG_FILE_ENV, "/does/not/exist/oci-config");
        let err = ConfigFile::load_default().unwrap_err();
        assert!(err.is_loading(), "{err:?}");
    }
}
