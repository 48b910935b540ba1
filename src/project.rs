/// Contains the configuration assembly pipeline
pub mod assemble;
/// Contains the platform, IDE and project type identities
pub mod types;
/// Contains the writer seam handing configs to the project generator
pub mod writer;

use crate::errors::BuildResult;
use crate::utils::configs::BuildContext;
use crate::utils::log::{log, LogLevel};
use assemble::{assemble, ProjectRequest};
use types::{IdeType, Platform, ProjectType};
use writer::{ProjectWriter, TomlWriter};

/// The full generation matrix: every project variant shipped with
/// Burgerlib and the IDEs it is generated for. Iteration order is the
/// order project files appear on disk.
pub fn arg_lists() -> Vec<(Platform, &'static str, ProjectType, Vec<IdeType>)> {
    use IdeType::*;
    let all_windows = vec![
        Vs2003, Vs2005, Vs2008, Vs2010, Vs2012, Vs2013, Vs2015, Vs2017, Vs2019, Watcom,
        Codewarrior50,
    ];
    vec![
        (Platform::Windows, "burger", ProjectType::Library, all_windows.clone()),
        (Platform::Windows, "unittests", ProjectType::Console, all_windows),
        (Platform::Ps3, "burger", ProjectType::Library, vec![Vs2015]),
        (Platform::Ps4, "burger", ProjectType::Library, vec![Vs2015]),
        (Platform::Vita, "burger", ProjectType::Library, vec![Vs2015]),
        (Platform::Vita, "unittests", ProjectType::Console, vec![Vs2015]),
        (Platform::Xbox360, "burger", ProjectType::Library, vec![Vs2010]),
        (Platform::Xbox360, "unittests", ProjectType::Console, vec![Vs2010]),
        (Platform::XboxOne, "burger", ProjectType::Library, vec![Vs2017]),
        (Platform::XboxOne, "unittests", ProjectType::Console, vec![Vs2017]),
        (Platform::Wiiu, "burger", ProjectType::Library, vec![Vs2013]),
        (Platform::Switch, "burger", ProjectType::Library, vec![Vs2017]),
        (Platform::Switch, "unittests", ProjectType::App, vec![Vs2017]),
        (Platform::Shield, "burger", ProjectType::Library, vec![Vs2015]),
        (Platform::Msdos, "burger", ProjectType::Library, vec![Watcom]),
        (Platform::Msdos4gw, "unittests", ProjectType::Console, vec![Watcom]),
        (Platform::MacOsx, "burger", ProjectType::Library, vec![Xcode3, Xcode5]),
        (Platform::MacOsx, "unittests", ProjectType::Console, vec![Xcode3, Xcode5]),
        (Platform::Ios, "burger", ProjectType::Library, vec![Xcode5]),
        (Platform::Linux, "burger", ProjectType::Library, vec![Make]),
        (Platform::Linux, "unittests", ProjectType::Console, vec![Make]),
        (Platform::Msdos, "burger", ProjectType::Library, vec![Codeblocks]),
        (Platform::Windows, "burger", ProjectType::Library, vec![Codeblocks]),
        (Platform::Windows, "unittests", ProjectType::Console, vec![Codeblocks]),
    ]
}

/// Generates every project file in the matrix, optionally restricted to
/// a single IDE. Fail fast on the first write error.
pub fn generate(ctx: &BuildContext, only_ide: Option<IdeType>) -> BuildResult<()> {
    let writer = TomlWriter;
    for (platform, name, project_type, ides) in arg_lists() {
        for ide in ides {
            if let Some(only) = only_ide {
                if ide != only {
                    continue;
                }
            }
            let request = ProjectRequest {
                platform,
                ide,
                project_type,
                name: name.to_string(),
            };
            log(
                LogLevel::Log,
                &format!("Generating {} for {} / {}", name, platform.as_str(), ide.as_str()),
            );
            let config = assemble(ctx, &request);
            writer.write(&ctx.working_dir, &config)?;
        }
    }
    Ok(())
}
