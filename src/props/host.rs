//! Seed a property table from the operating environment.
use std::{env, path::PathBuf};

use tracing::debug;

use super::{PropertyTable, WellKnownKey};

const DEFAULT_ENCODING: &str = "UTF-8";
const LOCALE_ENV_KEYS: [&str; 3] = ["LC_ALL", "LC_MESSAGES", "LANG"];

/// Abstraction for environment access while seeding.
pub trait HostProbe {
    fn var(&self, name: &str) -> Option<String>;
    fn current_dir(&self) -> Option<PathBuf>;
    fn temp_dir(&self) -> PathBuf;
    fn args(&self) -> Vec<String>;
    fn kernel_release(&self) -> Option<String>;
}

/// Probe that reads the real process environment.
pub struct SystemHostProbe;

impl HostProbe for SystemHostProbe {
    fn var(&self, name: &str) -> Option<String> {
        env::var(name).ok()
    }

    fn current_dir(&self) -> Option<PathBuf> {
        env::current_dir().ok()
    }

    fn temp_dir(&self) -> PathBuf {
        env::temp_dir()
    }

    fn args(&self) -> Vec<String> {
        env::args_os()
            .map(|arg| arg.to_string_lossy().into_owned())
            .collect()
    }

    #[cfg(unix)]
    fn kernel_release(&self) -> Option<String> {
        let mut name = std::mem::MaybeUninit::<libc::utsname>::uninit();
        let result = unsafe { libc::uname(name.as_mut_ptr()) };
        if result != 0 {
            return None;
        }
        let name = unsafe { name.assume_init() };
        let release = unsafe { std::ffi::CStr::from_ptr(name.release.as_ptr()) };
        release.to_str().ok().map(str::to_owned)
    }

    #[cfg(not(unix))]
    fn kernel_release(&self) -> Option<String> {
        None
    }
}

/// Locale fields parsed from a POSIX locale name such as `zh_CN.UTF-8@latin`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PosixLocale {
    pub language: Option<String>,
    pub country: Option<String>,
    pub encoding: Option<String>,
    pub variant: Option<String>,
}

impl PosixLocale {
    pub fn parse(raw: &str) -> Self {
        let (rest, variant) = split_once_nonempty(raw.trim(), '@');
        let (rest, encoding) = split_once_nonempty(rest, '.');
        if rest == "C" || rest == "POSIX" {
            return Self {
                language: Some("en".into()),
                encoding: encoding.map(str::to_owned),
                ..Self::default()
            };
        }
        let (language, country) = split_once_nonempty(rest, '_');

        Self {
            language: Some(language.to_ascii_lowercase()).filter(|v| !v.is_empty()),
            country: country.map(str::to_ascii_uppercase),
            encoding: encoding.map(str::to_owned),
            variant: variant.map(str::to_owned),
        }
    }
}

fn split_once_nonempty(raw: &str, separator: char) -> (&str, Option<&str>) {
    match raw.split_once(separator) {
        Some((head, tail)) if !tail.is_empty() => (head, Some(tail)),
        Some((head, _)) => (head, None),
        None => (raw, None),
    }
}

impl PropertyTable {
    /// Seed a table from the current process environment.
    pub fn from_host() -> Self {
        Self::from_probe(&SystemHostProbe)
    }

    /// Seed a table through `probe`. Values the probe cannot answer are left absent.
    pub fn from_probe(probe: &impl HostProbe) -> Self {
        let mut seed = Seed::default();

        seed.put(WellKnownKey::OsName, Some(os_display_name(env::consts::OS)));
        seed.put(WellKnownKey::OsArch, Some(env::consts::ARCH.to_string()));
        seed.put(WellKnownKey::OsVersion, probe.kernel_release());
        seed.put(
            WellKnownKey::CpuDataModel,
            Some(usize::BITS.to_string()),
        );
        let args = probe.args();
        seed.put(
            WellKnownKey::OsCommand,
            Some(args.join(" ")).filter(|command| !command.is_empty()),
        );

        seed.put(
            WellKnownKey::UserDir,
            probe.current_dir().map(|dir| dir.display().to_string()),
        );
        seed.put(
            WellKnownKey::UserHome,
            first_var(probe, &["HOME", "USERPROFILE"]),
        );
        seed.put(
            WellKnownKey::UserName,
            first_var(probe, &["USER", "USERNAME"]),
        );

        let locale = first_var(probe, &LOCALE_ENV_KEYS)
            .map(|raw| PosixLocale::parse(&raw))
            .unwrap_or_default();
        let encoding = locale
            .encoding
            .clone()
            .unwrap_or_else(|| DEFAULT_ENCODING.to_string());
        seed.put(WellKnownKey::UserLanguage, locale.language);
        seed.put(WellKnownKey::UserCountry, locale.country);
        seed.put(WellKnownKey::UserVariant, locale.variant);
        seed.put(WellKnownKey::OsEncoding, Some(encoding.clone()));
        seed.put(WellKnownKey::StdoutEncoding, Some(encoding.clone()));
        seed.put(WellKnownKey::StderrEncoding, Some(encoding));

        seed.put(
            WellKnownKey::FileSeparator,
            Some(std::path::MAIN_SEPARATOR.to_string()),
        );
        seed.put(
            WellKnownKey::PathSeparator,
            Some(path_list_separator().to_string()),
        );
        seed.put(
            WellKnownKey::LineSeparator,
            Some(line_separator().to_string()),
        );
        seed.put(
            WellKnownKey::RuntimeTmpDir,
            Some(probe.temp_dir().display().to_string()),
        );
        seed.put(WellKnownKey::RuntimeLibPath, probe.var("PATH"));

        debug!(
            target: "sysprops::host",
            seeded = seed.table.len(),
            "Seeded properties from host environment"
        );
        seed.table
    }
}

#[derive(Default)]
struct Seed {
    table: PropertyTable,
}

impl Seed {
    fn put(&mut self, key: WellKnownKey, value: Option<String>) {
        if let Some(value) = value.filter(|v| !v.is_empty()) {
            self.table
                .entries
                .insert(key.as_str().to_string(), value);
        }
    }
}

fn first_var(probe: &impl HostProbe, names: &[&str]) -> Option<String> {
    names
        .iter()
        .filter_map(|name| probe.var(name))
        .find(|value| !value.trim().is_empty())
}

fn os_display_name(os: &str) -> String {
    match os {
        "linux" => "Linux",
        "macos" => "Mac OS X",
        "windows" => "Windows",
        "freebsd" => "FreeBSD",
        "openbsd" => "OpenBSD",
        "netbsd" => "NetBSD",
        other => other,
    }
    .to_string()
}

const fn path_list_separator() -> char {
    if cfg!(windows) {
        ';'
    } else {
        ':'
    }
}

const fn line_separator() -> &'static str {
    if cfg!(windows) {
        "\r\n"
    } else {
        "\n"
    }
}
