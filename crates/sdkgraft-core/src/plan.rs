use crate::types::{PatchStep, StepOp, TextPatch};
use std::path::PathBuf;

pub const SDK_COORDINATE: &str = "net.geidea.sdk:pos-connect-sdk-egp";
pub const SDK_DEPENDENCY_LINE: &str =
    "implementation 'net.geidea.sdk:pos-connect-sdk-egp:1.0.4'";
pub const REGISTRATION_MARKER: &str = "// geidea-pos-connect";
pub const PACKAGE_LIST_ANCHOR: &str =
    "List<ReactPackage> packages = new PackageList(this).getPackages();";
pub const DEPENDENCIES_ANCHOR: &str = "dependencies {";

const APP_ENTRY: &str = "App.tsx";
const SRC_DIR: &str = "src";
const NATIVE_DIR: &str = "android/app/src/main/java/com/posapp/geidea";
const NATIVE_MODULE_FILES: [&str; 2] =
    ["GeideaPosConnectModule.java", "GeideaPosConnectPackage.java"];
const MAIN_APPLICATION: &str = "android/app/src/main/java/com/posapp/MainApplication.java";
const APP_BUILD_GRADLE: &str = "android/app/build.gradle";

/// Source and target roots. Defaults are the directory names the tool has
/// always assumed; both can be overridden from the command line.
#[derive(Debug, Clone)]
pub struct PlanConfig {
    pub source_root: PathBuf,
    pub target_root: PathBuf,
}

impl Default for PlanConfig {
    fn default() -> Self {
        Self {
            source_root: PathBuf::from("app-export"),
            target_root: PathBuf::from("PosApp"),
        }
    }
}

/// Builds the fixed Geidea integration plan. Order matters only for log
/// readability; steps are independent of each other.
pub fn build_plan(config: &PlanConfig) -> Vec<PatchStep> {
    let src = &config.source_root;
    let dst = &config.target_root;

    let mut steps = vec![
        PatchStep {
            label: "app sources".to_string(),
            target: dst.join(SRC_DIR),
            op: StepOp::Copy {
                source: src.join(SRC_DIR),
            },
            optional: false,
        },
        PatchStep {
            label: "app entry point".to_string(),
            target: dst.join(APP_ENTRY),
            op: StepOp::Copy {
                source: src.join(APP_ENTRY),
            },
            optional: false,
        },
    ];

    // The export only carries native sources when the SDK bridge was part of
    // the exported app; a plain JS export is still a valid input.
    for file in NATIVE_MODULE_FILES {
        steps.push(PatchStep {
            label: format!("native module: {}", file),
            target: dst.join(NATIVE_DIR).join(file),
            op: StepOp::Copy {
                source: src.join(NATIVE_DIR).join(file),
            },
            optional: true,
        });
    }

    steps.push(PatchStep {
        label: "package registration".to_string(),
        target: dst.join(MAIN_APPLICATION),
        op: StepOp::Patch(TextPatch {
            marker: REGISTRATION_MARKER.to_string(),
            anchor: PACKAGE_LIST_ANCHOR.to_string(),
            replacement: format!(
                "{}\n          packages.add(new com.posapp.geidea.GeideaPosConnectPackage()); {}",
                PACKAGE_LIST_ANCHOR, REGISTRATION_MARKER
            ),
        }),
        optional: false,
    });

    steps.push(PatchStep {
        label: "sdk dependency".to_string(),
        target: dst.join(APP_BUILD_GRADLE),
        op: StepOp::Patch(TextPatch {
            marker: SDK_COORDINATE.to_string(),
            anchor: DEPENDENCIES_ANCHOR.to_string(),
            replacement: format!("{}\n    {}", DEPENDENCIES_ANCHOR, SDK_DEPENDENCY_LINE),
        }),
        optional: false,
    });

    steps
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_shape() {
        let plan = build_plan(&PlanConfig::default());
        assert_eq!(plan.len(), 6);

        let copies = plan
            .iter()
            .filter(|s| matches!(s.op, StepOp::Copy { .. }))
            .count();
        assert_eq!(copies, 4);

        let optional: Vec<_> = plan.iter().filter(|s| s.optional).collect();
        assert_eq!(optional.len(), 2);
        assert!(optional.iter().all(|s| s.label.starts_with("native module")));
    }

    #[test]
    fn test_replacements_embed_markers() {
        for step in build_plan(&PlanConfig::default()) {
            if let StepOp::Patch(patch) = &step.op {
                assert!(
                    patch.replacement.contains(&patch.marker),
                    "{} replacement must embed its marker",
                    step.label
                );
                assert!(patch.replacement.starts_with(&patch.anchor));
            }
        }
    }

    #[test]
    fn test_paths_are_rooted_in_config() {
        let config = PlanConfig {
            source_root: PathBuf::from("/tmp/export"),
            target_root: PathBuf::from("/tmp/app"),
        };
        for step in build_plan(&config) {
            assert!(step.target.starts_with("/tmp/app"), "{:?}", step.target);
            if let StepOp::Copy { source } = &step.op {
                assert!(source.starts_with("/tmp/export"), "{:?}", source);
            }
        }
    }
}
