//! Closed identity sets for the project generator.
//!
//! Platform and IDE used to be matched as loose strings; the enums make
//! the dispatch in the assembly pipeline exhaustive and let the overlay
//! rules ask family questions (`is_codewarrior`, `is_visual_studio`)
//! instead of comparing names.

use serde::Serialize;

/// Target operating system a project compiles for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Windows,
    Msdos,
    Msdos4gw,
    Linux,
    MacOsx,
    Mac,
    Ios,
    Ps3,
    Ps4,
    Vita,
    Wiiu,
    Switch,
    Xbox360,
    XboxOne,
    Shield,
}

impl Platform {
    pub fn as_str(&self) -> &'static str {
        match self {
            Platform::Windows => "windows",
            Platform::Msdos => "msdos",
            Platform::Msdos4gw => "msdos4gw",
            Platform::Linux => "linux",
            Platform::MacOsx => "macosx",
            Platform::Mac => "mac",
            Platform::Ios => "ios",
            Platform::Ps3 => "ps3",
            Platform::Ps4 => "ps4",
            Platform::Vita => "vita",
            Platform::Wiiu => "wiiu",
            Platform::Switch => "switch",
            Platform::Xbox360 => "xbox360",
            Platform::XboxOne => "xboxone",
            Platform::Shield => "shield",
        }
    }

    /// Name of this platform's folder in the SDK tree. The SDK tree calls
    /// every MS-DOS flavor `dos`.
    pub fn sdk_folder(&self) -> &'static str {
        match self {
            Platform::Msdos | Platform::Msdos4gw => "dos",
            _ => self.as_str(),
        }
    }

    pub fn is_windows(&self) -> bool {
        matches!(self, Platform::Windows)
    }

    pub fn is_msdos(&self) -> bool {
        matches!(self, Platform::Msdos | Platform::Msdos4gw)
    }

    pub fn is_android(&self) -> bool {
        matches!(self, Platform::Shield)
    }
}

/// Build tool or IDE generation a project file is written for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IdeType {
    Vs2003,
    Vs2005,
    Vs2008,
    Vs2010,
    Vs2012,
    Vs2013,
    Vs2015,
    Vs2017,
    Vs2019,
    Watcom,
    Codewarrior50,
    Codeblocks,
    Xcode3,
    Xcode5,
    Make,
}

impl IdeType {
    pub fn as_str(&self) -> &'static str {
        match self {
            IdeType::Vs2003 => "vs2003",
            IdeType::Vs2005 => "vs2005",
            IdeType::Vs2008 => "vs2008",
            IdeType::Vs2010 => "vs2010",
            IdeType::Vs2012 => "vs2012",
            IdeType::Vs2013 => "vs2013",
            IdeType::Vs2015 => "vs2015",
            IdeType::Vs2017 => "vs2017",
            IdeType::Vs2019 => "vs2019",
            IdeType::Watcom => "watcom",
            IdeType::Codewarrior50 => "codewarrior50",
            IdeType::Codeblocks => "codeblocks",
            IdeType::Xcode3 => "xcode3",
            IdeType::Xcode5 => "xcode5",
            IdeType::Make => "make",
        }
    }

    pub fn from_name(name: &str) -> Option<IdeType> {
        let all = [
            IdeType::Vs2003,
            IdeType::Vs2005,
            IdeType::Vs2008,
            IdeType::Vs2010,
            IdeType::Vs2012,
            IdeType::Vs2013,
            IdeType::Vs2015,
            IdeType::Vs2017,
            IdeType::Vs2019,
            IdeType::Watcom,
            IdeType::Codewarrior50,
            IdeType::Codeblocks,
            IdeType::Xcode3,
            IdeType::Xcode5,
            IdeType::Make,
        ];
        all.into_iter().find(|ide| ide.as_str() == name)
    }

    pub fn is_visual_studio(&self) -> bool {
        matches!(
            self,
            IdeType::Vs2003
                | IdeType::Vs2005
                | IdeType::Vs2008
                | IdeType::Vs2010
                | IdeType::Vs2012
                | IdeType::Vs2013
                | IdeType::Vs2015
                | IdeType::Vs2017
                | IdeType::Vs2019
        )
    }

    /// Visual Studio generations that still need the standalone DirectX
    /// SDK on the include path.
    pub fn is_legacy_visual_studio(&self) -> bool {
        matches!(self, IdeType::Vs2003 | IdeType::Vs2005 | IdeType::Vs2008)
    }

    pub fn is_codewarrior(&self) -> bool {
        matches!(self, IdeType::Codewarrior50)
    }

    pub fn is_xcode(&self) -> bool {
        matches!(self, IdeType::Xcode3 | IdeType::Xcode5)
    }
}

/// Kind of artifact a project produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Library,
    Console,
    App,
}

impl ProjectType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Library => "library",
            ProjectType::Console => "console",
            ProjectType::App => "app",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn msdos_flavors_share_the_dos_sdk_folder() {
        assert_eq!(Platform::Msdos.sdk_folder(), "dos");
        assert_eq!(Platform::Msdos4gw.sdk_folder(), "dos");
        assert_eq!(Platform::Windows.sdk_folder(), "windows");
    }

    #[test]
    fn ide_names_round_trip() {
        assert_eq!(IdeType::from_name("watcom"), Some(IdeType::Watcom));
        assert_eq!(IdeType::from_name("vs2019"), Some(IdeType::Vs2019));
        assert_eq!(IdeType::from_name("vs2021"), None);
    }

    #[test]
    fn ide_families() {
        assert!(IdeType::Vs2003.is_legacy_visual_studio());
        assert!(!IdeType::Vs2010.is_legacy_visual_studio());
        assert!(IdeType::Codewarrior50.is_codewarrior());
        assert!(!IdeType::Watcom.is_visual_studio());
        assert!(IdeType::Xcode3.is_xcode());
    }
}
