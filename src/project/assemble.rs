//! Project configuration assembly.
//!
//! A configuration is built by an ordered pipeline of contribution
//! stages: the base platform rules run first, then the IDE family
//! overlays in a fixed order. Every stage takes the configuration by
//! value and returns a new one; stages only append or prepend to the
//! lists, nothing ever removes an earlier entry, so the final ordering
//! is fully determined by the stage order.

use std::path::Path;

use itertools::Itertools;
use serde::Serialize;

use super::types::{IdeType, Platform, ProjectType};
use crate::utils::configs::BuildContext;

/// Directories holding the cross platform source code.
const LIB_SOURCE: &[&str] = &[
    "../source",
    "../source/ansi",
    "../source/audio",
    "../source/commandline",
    "../source/compression",
    "../source/file",
    "../source/flashplayer",
    "../source/graphics",
    "../source/graphics/effects",
    "../source/graphics/shaders",
    "../source/input",
    "../source/lowlevel",
    "../source/math",
    "../source/memory",
    "../source/network",
    "../source/random",
    "../source/text",
];

const LIB_WINDOWS: &[&str] = &[
    "../source/windows",
    "../source/graphics/shadersdx9",
    "../source/graphics/shadersopengl",
    "../source/graphics/vulkan",
];
const LIB_DOS: &[&str] = &["../source/msdos"];
const LIB_LINUX: &[&str] = &[
    "../source/linux",
    "../source/graphics/shadersopengl",
    "../source/graphics/vulkan",
];
const LIB_MACOSX: &[&str] = &["../source/macosx", "../source/graphics/shadersopengl"];
const LIB_MAC: &[&str] = &["../source/mac", "../source/graphics/shadersopengl"];
const LIB_IOS: &[&str] = &["../source/ios", "../source/graphics/shadersopengl"];
const LIB_PS3: &[&str] = &["../source/ps3"];
const LIB_PS4: &[&str] = &["../source/ps4"];
const LIB_VITA: &[&str] = &["../source/vita", "../source/graphics/shadersvita"];
const LIB_WIIU: &[&str] = &["../source/wiiu"];
const LIB_SWITCH: &[&str] = &["../source/switch", "../source/graphics/vulkan"];
const LIB_XBOX_360: &[&str] = &[
    "../source/xbox360",
    "../source/graphics/shadersxbox360",
];
const LIB_XBOX_ONE: &[&str] = &[
    "../source/xboxone",
    "../source/graphics/shadersxboxone",
];
const LIB_SHIELD: &[&str] = &[
    "../source/shield",
    "../source/graphics/shadersopengl",
    "../source/graphics/vulkan",
];

/// Generated file every project carries.
const LIB_GENERATED: &[&str] = &["../source/generated/version.h"];

/// What the caller asks the assembler for.
#[derive(Debug, Clone)]
pub struct ProjectRequest {
    pub platform: Platform,
    pub ide: IdeType,
    pub project_type: ProjectType,
    pub name: String,
}

/// A custom build rule for one file pattern, handed through to the
/// project file generator as-is.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CustomRule {
    pub pattern: String,
    pub settings: Vec<(String, String)>,
}

impl CustomRule {
    fn new(pattern: &str, settings: &[(&str, &str)]) -> Self {
        CustomRule {
            pattern: pattern.to_string(),
            settings: settings
                .iter()
                .map(|(key, value)| (key.to_string(), value.to_string()))
                .collect(),
        }
    }
}

/// The accumulated configuration record handed to the generator.
#[derive(Debug, Clone, Serialize)]
pub struct ProjectConfig {
    pub name: String,
    pub platform: Platform,
    pub ide: IdeType,
    pub project_type: ProjectType,
    pub source_folders: Vec<String>,
    pub source_files: Vec<String>,
    pub include_folders: Vec<String>,
    pub library_folders: Vec<String>,
    pub libraries: Vec<String>,
    pub defines: Vec<String>,
    pub vs_props: Vec<String>,
    pub vs_targets: Vec<String>,
    pub vs_rules: Vec<String>,
    pub custom_rules: Vec<CustomRule>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deploy_folder: Option<String>,
    pub env_variables: Vec<String>,
}

impl ProjectConfig {
    fn new(request: &ProjectRequest) -> Self {
        ProjectConfig {
            name: request.name.clone(),
            platform: request.platform,
            ide: request.ide,
            project_type: request.project_type,
            source_folders: to_strings(LIB_SOURCE),
            source_files: to_strings(LIB_GENERATED),
            include_folders: Vec::new(),
            library_folders: Vec::new(),
            libraries: Vec::new(),
            defines: Vec::new(),
            vs_props: Vec::new(),
            vs_targets: Vec::new(),
            vs_rules: Vec::new(),
            custom_rules: Vec::new(),
            deploy_folder: None,
            env_variables: Vec::new(),
        }
    }

    fn append_source_folders(mut self, folders: &[&str]) -> Self {
        self.source_folders.extend(to_strings(folders));
        self
    }

    fn append_source_file(mut self, file: &str) -> Self {
        self.source_files.push(file.to_string());
        self
    }

    fn append_include_folders(mut self, folders: &[&str]) -> Self {
        self.include_folders.extend(to_strings(folders));
        self
    }

    fn append_library_folders(mut self, folders: &[&str]) -> Self {
        self.library_folders.extend(to_strings(folders));
        self
    }

    fn prepend_library_folders(mut self, folders: &[&str]) -> Self {
        let mut merged = to_strings(folders);
        merged.append(&mut self.library_folders);
        self.library_folders = merged;
        self
    }

    fn append_library(mut self, library: &str) -> Self {
        self.libraries.push(library.to_string());
        self
    }

    fn define(mut self, name: &str) -> Self {
        self.defines.push(name.to_string());
        self
    }

    fn vs_customization(mut self, name: &str) -> Self {
        self.vs_props
            .push(format!("$(VCTargetsPath)\\BuildCustomizations\\{}.props", name));
        self.vs_targets
            .push(format!("$(VCTargetsPath)\\BuildCustomizations\\{}.targets", name));
        self
    }

    fn vs_rule(mut self, name: &str) -> Self {
        self.vs_rules.push(name.to_string());
        self
    }

    fn custom_rule(mut self, rule: CustomRule) -> Self {
        self.custom_rules.push(rule);
        self
    }

    fn deploy_to(mut self, folder: String) -> Self {
        self.deploy_folder = Some(folder);
        self
    }

    fn env_variable(mut self, name: &str) -> Self {
        self.env_variables.push(name.to_string());
        self
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|item| (*item).to_string()).collect()
}

/// Adds entries for the generated headers of every shader source with
/// the given extension in `directory`. A missing directory contributes
/// nothing; the folder only exists on trees with that platform's code.
fn find_generated_source(
    mut config: ProjectConfig,
    working_dir: &Path,
    directory: &str,
    extension: &str,
) -> ProjectConfig {
    let scan = working_dir.join(directory);
    let Ok(entries) = std::fs::read_dir(&scan) else {
        return config;
    };
    let names: Vec<String> = entries
        .flatten()
        .filter_map(|entry| {
            let path = entry.path();
            if !path.is_file() {
                return None;
            }
            if path.extension().and_then(|ext| ext.to_str()) != Some(extension) {
                return None;
            }
            path.file_stem()
                .and_then(|stem| stem.to_str())
                .map(|stem| format!("{}/generated/{}.h", directory, stem))
        })
        .sorted()
        .collect();
    for name in names {
        config = config.append_source_file(&name);
    }
    config
}

/// One stage of the assembly pipeline.
pub trait Contribute {
    fn contribute(&self, ctx: &BuildContext, config: ProjectConfig) -> ProjectConfig;
}

/// Base rules keyed purely on the target platform.
pub struct PlatformRules;

impl Contribute for PlatformRules {
    fn contribute(&self, ctx: &BuildContext, config: ProjectConfig) -> ProjectConfig {
        let platform = config.platform;
        let ide = config.ide;
        let mut config = config;

        if platform.is_windows() {
            config = config.append_source_folders(LIB_WINDOWS);
            if !ide.is_codewarrior() {
                config = config.append_include_folders(&[
                    "$(BURGER_SDKS)/windows/perforce",
                    "$(BURGER_SDKS)/windows/directx9",
                    "$(BURGER_SDKS)/windows/opengl",
                ]);
            }
            config = config
                .define("_CRT_NONSTDC_NO_WARNINGS")
                .define("_CRT_SECURE_NO_WARNINGS")
                .define("GLUT_NO_LIB_PRAGMA")
                .define("_CRT_SECURE_CPP_OVERLOAD_STANDARD_NAMES=1");
            config = find_generated_source(config, &ctx.working_dir, "../source/windows", "hlsl");
        }

        if platform.is_msdos() {
            config = config
                .append_source_folders(LIB_DOS)
                .append_include_folders(&["$(BURGER_SDKS)/dos/x32"]);
        }

        config = match platform {
            Platform::Linux => config.append_source_folders(LIB_LINUX),
            Platform::MacOsx => config.append_source_folders(LIB_MACOSX),
            Platform::Mac => config.append_source_folders(LIB_MAC),
            Platform::Ios => config.append_source_folders(LIB_IOS),
            Platform::Ps3 => config.append_source_folders(LIB_PS3),
            Platform::Ps4 => config.append_source_folders(LIB_PS4),
            Platform::Vita => {
                let config = config.append_source_folders(LIB_VITA);
                find_generated_source(
                    config,
                    &ctx.working_dir,
                    "../source/graphics/shadersvita",
                    "vitacg",
                )
            }
            Platform::Wiiu => config.append_source_folders(LIB_WIIU),
            Platform::Switch => config.append_source_folders(LIB_SWITCH),
            Platform::Xbox360 => {
                let config = config.append_source_folders(LIB_XBOX_360);
                find_generated_source(
                    config,
                    &ctx.working_dir,
                    "../source/graphics/shadersxbox360",
                    "x360sl",
                )
            }
            Platform::XboxOne => config.append_source_folders(LIB_XBOX_ONE),
            Platform::Shield => config.append_source_folders(LIB_SHIELD),
            _ => config,
        };

        if platform.is_windows() || platform.is_android() || platform == Platform::Linux {
            config = find_generated_source(
                config,
                &ctx.working_dir,
                "../source/graphics/shadersopengl",
                "glsl",
            );
        }
        if platform.is_windows() {
            config = find_generated_source(
                config,
                &ctx.working_dir,
                "../source/graphics/shadersdx9",
                "hlsl",
            );
        }

        // The unit test suite links against the deployed library, the
        // library project deploys itself.
        if config.name == "unittests" {
            config = config.append_source_folders(&["../unittest"]);
            if platform == Platform::XboxOne {
                config =
                    config.append_source_file("../unittest/xboxone/unittestxboxone.appxmanifest");
            }
            let burgerlib = format!("$(BURGER_SDKS)/{}/burgerlib", platform.sdk_folder());
            config = config.append_library_folders(&[burgerlib.as_str()]);
            if platform == Platform::Linux {
                config = config.append_library("GL");
            }
        } else {
            config =
                config.deploy_to(format!("$(BURGER_SDKS)/{}/burgerlib", platform.sdk_folder()));
        }

        if platform.is_windows() && (ide.is_codewarrior() || config.name == "unittests") {
            config = config.append_library_folders(&[
                "$(BURGER_SDKS)/windows/perforce",
                "$(BURGER_SDKS)/windows/opengl",
                "$(BURGER_SDKS)/windows/directx9",
            ]);
        }
        config
    }
}

/// Open Watcom overlay: Watcom ships no modern Windows SDK, so the
/// projects target Windows XP level headers from the SDKs tree.
pub struct WatcomRules;

impl Contribute for WatcomRules {
    fn contribute(&self, _ctx: &BuildContext, config: ProjectConfig) -> ProjectConfig {
        if config.ide != IdeType::Watcom {
            return config;
        }
        let mut config = config;
        if config.platform.is_windows() {
            config = config
                .define("WINVER=0x0600")
                .define("_WIN32_WINNT=0x0600")
                .append_include_folders(&["$(BURGER_SDKS)/windows/windows5"]);
        }
        config
    }
}

/// CodeWarrior overlay. The bundled Win32 headers predate DirectWrite
/// and the default search paths miss the game SDKs, so those come first.
pub struct CodeWarriorRules;

impl Contribute for CodeWarriorRules {
    fn contribute(&self, _ctx: &BuildContext, config: ProjectConfig) -> ProjectConfig {
        if !config.ide.is_codewarrior() {
            return config;
        }
        let mut config = config;
        if config.platform.is_windows() {
            config = config
                .define("DWRITE_NO_WINDOWS_H")
                .prepend_library_folders(&[
                    "$(BURGER_SDKS)/windows/opengl",
                    "$(BURGER_SDKS)/windows/directplay",
                    "$(BURGER_SDKS)/windows/steam",
                ])
                .append_library_folders(&[
                    "$(CodeWarrior)/MSL",
                    "$(CodeWarrior)/Win32-x86 Support",
                ]);
        }
        config.env_variable("BURGER_SDKS")
    }
}

/// Visual Studio overlay: build customizations for the shader compilers
/// and the legacy DirectX SDK include path for the pre-2010 IDEs.
pub struct VisualStudioRules;

impl Contribute for VisualStudioRules {
    fn contribute(&self, ctx: &BuildContext, config: ProjectConfig) -> ProjectConfig {
        if !config.ide.is_visual_studio() {
            return config;
        }
        let mut config = config;
        let platform = config.platform;

        if platform == Platform::Vita {
            config = config.vs_customization("vitacg");
        }
        if platform == Platform::Xbox360 {
            config = config.vs_customization("x360sl");
        }
        if platform.is_windows() || platform.is_android() || platform == Platform::Linux {
            config = config.vs_customization("glsl").vs_rule("glsl.rules");
        }
        if platform.is_windows() {
            config = config.vs_customization("hlsl").vs_rule("hlsl.rules");
            if config.ide.is_legacy_visual_studio() {
                if let Some(dx_sdk) = &ctx.dx_sdk {
                    let include = dx_sdk.join("Include").to_string_lossy().to_string();
                    config = config.append_include_folders(&[include.as_str()]);
                }
            }
        }
        config
    }
}

/// GNU family overlay (make and CodeBlocks).
pub struct GnuRules;

impl Contribute for GnuRules {
    fn contribute(&self, _ctx: &BuildContext, config: ProjectConfig) -> ProjectConfig {
        if config.ide != IdeType::Codeblocks && config.ide != IdeType::Make {
            return config;
        }
        let mut config = config;
        if config.ide == IdeType::Codeblocks && config.platform.is_windows() {
            config = config.append_include_folders(&["$(BURGER_SDKS)/windows/windows5"]);
        }
        config
    }
}

/// Custom build rules mapping the shader source extensions to their
/// generated header naming convention and target profile.
pub struct ShaderRules;

impl Contribute for ShaderRules {
    fn contribute(&self, _ctx: &BuildContext, config: ProjectConfig) -> ProjectConfig {
        const HEADER: (&str, &str) = (
            "HeaderFileName",
            r"%(RootDir)%(Directory)Generated\%(FileName).h",
        );
        const VARIABLE: (&str, &str) = ("VariableName", "g_%(FileName)");
        config
            .custom_rule(CustomRule::new(
                "ps*.hlsl",
                &[HEADER, VARIABLE, ("TargetProfile", "ps_2_0")],
            ))
            .custom_rule(CustomRule::new(
                "vs*.hlsl",
                &[HEADER, VARIABLE, ("TargetProfile", "vs_2_0")],
            ))
            .custom_rule(CustomRule::new(
                "*.glsl",
                &[(
                    "ObjectFileName",
                    r"%(RootDir)%(Directory)Generated\%(FileName).h",
                )],
            ))
            .custom_rule(CustomRule::new(
                "ps*.x360sl",
                &[HEADER, VARIABLE, ("TargetProfile", "ps_2_0")],
            ))
            .custom_rule(CustomRule::new(
                "vs20*.x360sl",
                &[HEADER, VARIABLE, ("TargetProfile", "vs_2_0")],
            ))
            .custom_rule(CustomRule::new(
                "ps*.vitacg",
                &[HEADER, ("TargetProfile", "sce_fp_psp2")],
            ))
            .custom_rule(CustomRule::new(
                "vs*.vitacg",
                &[HEADER, ("TargetProfile", "sce_vp_psp2")],
            ))
    }
}

/// Assembles the configuration for one project variant by running the
/// fixed stage pipeline. Reordering the stages changes path precedence,
/// so the order is part of the contract.
pub fn assemble(ctx: &BuildContext, request: &ProjectRequest) -> ProjectConfig {
    let stages: [&dyn Contribute; 6] = [
        &PlatformRules,
        &WatcomRules,
        &CodeWarriorRules,
        &VisualStudioRules,
        &GnuRules,
        &ShaderRules,
    ];
    stages
        .iter()
        .fold(ProjectConfig::new(request), |config, stage| {
            stage.contribute(ctx, config)
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_ctx() -> BuildContext {
        let mut ctx = BuildContext::new(PathBuf::from("projects"), "all");
        ctx.dx_sdk = None;
        ctx
    }

    fn request(platform: Platform, ide: IdeType, name: &str) -> ProjectRequest {
        ProjectRequest {
            platform,
            ide,
            project_type: if name == "unittests" {
                ProjectType::Console
            } else {
                ProjectType::Library
            },
            name: name.to_string(),
        }
    }

    #[test]
    fn watcom_windows_targets_xp_headers() {
        let config = assemble(
            &test_ctx(),
            &request(Platform::Windows, IdeType::Watcom, "burger"),
        );
        assert!(config.defines.contains(&"WINVER=0x0600".to_string()));
        assert!(config.defines.contains(&"_WIN32_WINNT=0x0600".to_string()));
        assert!(!config.defines.contains(&"DWRITE_NO_WINDOWS_H".to_string()));
        assert!(config
            .include_folders
            .contains(&"$(BURGER_SDKS)/windows/windows5".to_string()));
    }

    #[test]
    fn codewarrior_windows_disables_dwrite_and_orders_libraries() {
        let config = assemble(
            &test_ctx(),
            &request(Platform::Windows, IdeType::Codewarrior50, "burger"),
        );
        assert!(config.defines.contains(&"DWRITE_NO_WINDOWS_H".to_string()));

        let folders = &config.library_folders;
        let opengl = folders
            .iter()
            .position(|f| f == "$(BURGER_SDKS)/windows/opengl")
            .unwrap();
        let steam = folders
            .iter()
            .position(|f| f == "$(BURGER_SDKS)/windows/steam")
            .unwrap();
        let msl = folders.iter().position(|f| f == "$(CodeWarrior)/MSL").unwrap();
        assert!(opengl < msl);
        assert!(steam < msl);
        // CodeWarrior builds against its own headers, not the DirectX SDK.
        assert!(!config
            .include_folders
            .contains(&"$(BURGER_SDKS)/windows/directx9".to_string()));
        assert!(config.env_variables.contains(&"BURGER_SDKS".to_string()));
    }

    #[test]
    fn windows_base_defines_are_always_present() {
        for ide in [IdeType::Watcom, IdeType::Vs2019, IdeType::Codewarrior50] {
            let config = assemble(&test_ctx(), &request(Platform::Windows, ide, "burger"));
            assert!(
                config
                    .defines
                    .contains(&"_CRT_SECURE_NO_WARNINGS".to_string()),
                "missing base define for {:?}",
                ide
            );
        }
    }

    #[test]
    fn unittests_link_against_the_deployed_library() {
        let config = assemble(
            &test_ctx(),
            &request(Platform::Msdos4gw, IdeType::Watcom, "unittests"),
        );
        assert!(config
            .source_folders
            .contains(&"../unittest".to_string()));
        assert!(config
            .library_folders
            .contains(&"$(BURGER_SDKS)/dos/burgerlib".to_string()));
        assert!(config.deploy_folder.is_none());
    }

    #[test]
    fn library_projects_deploy_into_the_sdk_tree() {
        let config = assemble(
            &test_ctx(),
            &request(Platform::Vita, IdeType::Vs2015, "burger"),
        );
        assert_eq!(
            config.deploy_folder.as_deref(),
            Some("$(BURGER_SDKS)/vita/burgerlib")
        );
    }

    #[test]
    fn linux_unittests_pull_in_opengl() {
        let config = assemble(
            &test_ctx(),
            &request(Platform::Linux, IdeType::Make, "unittests"),
        );
        assert!(config.libraries.contains(&"GL".to_string()));
    }

    #[test]
    fn visual_studio_gets_shader_customizations() {
        let config = assemble(
            &test_ctx(),
            &request(Platform::Xbox360, IdeType::Vs2010, "burger"),
        );
        assert!(config
            .vs_props
            .contains(&"$(VCTargetsPath)\\BuildCustomizations\\x360sl.props".to_string()));
        let windows = assemble(
            &test_ctx(),
            &request(Platform::Windows, IdeType::Vs2019, "burger"),
        );
        assert!(windows.vs_rules.contains(&"hlsl.rules".to_string()));
        assert!(windows.vs_rules.contains(&"glsl.rules".to_string()));
        // Non-VS IDEs carry no VS customizations.
        let watcom = assemble(
            &test_ctx(),
            &request(Platform::Windows, IdeType::Watcom, "burger"),
        );
        assert!(watcom.vs_props.is_empty());
    }

    #[test]
    fn legacy_visual_studio_appends_the_directx_sdk() {
        let mut ctx = test_ctx();
        ctx.dx_sdk = Some(PathBuf::from("/opt/dxsdk"));
        let config = assemble(&ctx, &request(Platform::Windows, IdeType::Vs2005, "burger"));
        assert!(config
            .include_folders
            .iter()
            .any(|folder| folder.ends_with("Include")));
        let modern = assemble(&ctx, &request(Platform::Windows, IdeType::Vs2019, "burger"));
        assert!(!modern
            .include_folders
            .iter()
            .any(|folder| folder.ends_with("Include")));
    }

    #[test]
    fn shader_rules_carry_the_target_profiles() {
        let config = assemble(
            &test_ctx(),
            &request(Platform::Windows, IdeType::Vs2019, "burger"),
        );
        let pixel = config
            .custom_rules
            .iter()
            .find(|rule| rule.pattern == "ps*.hlsl")
            .unwrap();
        assert!(pixel
            .settings
            .contains(&("TargetProfile".to_string(), "ps_2_0".to_string())));
        let vita_vertex = config
            .custom_rules
            .iter()
            .find(|rule| rule.pattern == "vs*.vitacg")
            .unwrap();
        assert!(vita_vertex
            .settings
            .contains(&("TargetProfile".to_string(), "sce_vp_psp2".to_string())));
    }

    #[test]
    fn stages_never_remove_earlier_entries() {
        let ctx = test_ctx();
        let req = request(Platform::Windows, IdeType::Codewarrior50, "unittests");
        let base = PlatformRules.contribute(&ctx, ProjectConfig::new(&req));
        let layered = assemble(&ctx, &req);
        for folder in &base.source_folders {
            assert!(layered.source_folders.contains(folder));
        }
        for define in &base.defines {
            assert!(layered.defines.contains(define));
        }
        for folder in &base.library_folders {
            assert!(layered.library_folders.contains(folder));
        }
    }

    #[test]
    fn assembly_is_deterministic() {
        let ctx = test_ctx();
        let req = request(Platform::Windows, IdeType::Vs2019, "burger");
        let first = assemble(&ctx, &req);
        let second = assemble(&ctx, &req);
        assert_eq!(first.source_folders, second.source_folders);
        assert_eq!(first.defines, second.defines);
        assert_eq!(first.library_folders, second.library_folders);
        assert_eq!(first.custom_rules, second.custom_rules);
    }
}
