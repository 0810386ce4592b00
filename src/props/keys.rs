//! Catalog of well-known property keys and their convenience getters.
use std::fmt;

use serde::Serialize;

use super::PropertyTable;

macro_rules! well_known_keys {
    ($( $(#[$doc:meta])* $variant:ident => $key:literal, $getter:ident, $description:literal; )+) => {
        /// Well-known property keys seeded from the host or supplied by an overlay.
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
        pub enum WellKnownKey {
            $( $(#[$doc])* $variant, )+
        }

        impl WellKnownKey {
            /// Every catalog entry, in declaration order.
            pub const ALL: &'static [WellKnownKey] = &[ $( WellKnownKey::$variant, )+ ];

            /// Property name as stored in the table.
            pub const fn as_str(&self) -> &'static str {
                match self {
                    $( WellKnownKey::$variant => $key, )+
                }
            }

            /// Name of the matching convenience getter on `PropertyTable`.
            pub const fn getter_name(&self) -> &'static str {
                match self {
                    $( WellKnownKey::$variant => stringify!($getter), )+
                }
            }

            pub const fn description(&self) -> &'static str {
                match self {
                    $( WellKnownKey::$variant => $description, )+
                }
            }
        }

        impl PropertyTable {
            $(
                #[doc = concat!("Value of `", $key, "`.")]
                pub fn $getter(&self) -> Option<&str> {
                    self.get_well_known(WellKnownKey::$variant)
                }
            )+
        }
    };
}

well_known_keys! {
    OsName => "os.name", os_name, "Operating system name";
    OsVersion => "os.version", os_version, "Operating system version";
    /// Default character encoding of the operating system.
    OsEncoding => "sun.jnu.encoding", os_encoding, "Operating system default encoding";
    /// Command line used to launch the current process.
    OsCommand => "sun.java.command", os_command, "Command that started the process";
    OsArch => "os.arch", os_arch, "Operating system architecture";
    CpuIsaList => "sun.cpu.isalist", cpu_isa_list, "CPU instruction sets";
    /// Pointer width of the process, `32` or `64`.
    CpuDataModel => "sun.arch.data.model", cpu_data_model, "CPU data model in bits";
    UserDir => "user.dir", user_dir, "Current working directory";
    UserName => "user.name", user_name, "Account name of the user";
    UserHome => "user.home", user_home, "Home directory of the user";
    UserVariant => "user.variant", user_variant, "Locale variant of the user";
    /// Two-letter country code, e.g. `CN`.
    UserCountry => "user.country", user_country, "Locale country of the user";
    /// Two-letter language code, e.g. `zh`.
    UserLanguage => "user.language", user_language, "Locale language of the user";
    UserScript => "user.script", user_script, "Locale script of the user";
    VmName => "java.vm.name", jvm_name, "Virtual machine name";
    VmSpecName => "java.vm.specification.name", jvm_spec_name, "Virtual machine specification name";
    VmVendor => "java.vm.vendor", jvm_vendor, "Virtual machine vendor";
    VmVendorUrl => "java.vendor.url", jvm_vendor_url, "Virtual machine vendor URL";
    VmVersion => "java.vm.version", jvm_version, "Virtual machine version";
    VmSpecVersion => "java.vm.specification.version", jvm_spec_version, "Virtual machine specification version";
    VmSpecVendor => "java.vm.specification.vendor", jvm_spec_vendor, "Virtual machine specification vendor";
    RuntimeName => "java.runtime.name", java_run_name, "Runtime name";
    RuntimeHome => "java.home", java_home, "Runtime installation directory";
    RuntimeVersion => "java.version", java_version, "Runtime version";
    RuntimeSpecVersion => "java.specification.version", java_spec_version, "Runtime specification version";
    RuntimeClassVersion => "java.class.version", java_class_version, "Runtime class file version";
    RuntimeVersionDate => "java.version.date", java_version_date, "Runtime release date";
    RuntimeSpecName => "java.specification.name", java_spec_name, "Runtime specification name";
    RuntimeSpecVendor => "java.specification.vendor", java_spec_vendor, "Runtime specification vendor";
    RuntimeClassPath => "java.class.path", java_class_path, "Runtime class path";
    RuntimeLauncher => "sun.java.launcher", java_launcher, "Runtime launcher";
    RuntimeBinPath => "sun.boot.library.path", java_bin_path, "Runtime binary directory";
    /// Library search path, separated by `path.separator`.
    RuntimeLibPath => "java.library.path", java_lib_path, "Library search path";
    RuntimeTmpDir => "java.io.tmpdir", java_tmp_dir, "Temporary directory";
    RuntimeBugUrl => "java.vendor.url.bug", java_bug_url, "Runtime bug report URL";
    FileSeparator => "file.separator", file_separator, "File path separator";
    LineSeparator => "line.separator", line_separator, "Line separator";
    PathSeparator => "path.separator", path_separator, "Path list separator";
    StdoutEncoding => "stdout.encoding", stdout_encoding, "Standard output encoding";
    StderrEncoding => "stderr.encoding", stderr_encoding, "Standard error encoding";
}

impl WellKnownKey {
    /// Resolve a property name to its catalog entry.
    pub fn from_key(key: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|known| known.as_str() == key)
    }

    pub fn catalog_entry(&self) -> CatalogEntry {
        CatalogEntry {
            key: self.as_str(),
            getter: self.getter_name(),
            description: self.description(),
        }
    }
}

impl fmt::Display for WellKnownKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Serializable view of a catalog entry.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CatalogEntry {
    pub key: &'static str,
    pub getter: &'static str,
    pub description: &'static str,
}
