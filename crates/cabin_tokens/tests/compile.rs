use std::sync::Arc;

use cabin_tokens::{
    compile_document, dangling_references, emit, ArtifactLayout, MemorySink, ThemeDocument,
    ThemeOutput, TokenConfig, DEFAULT_ROOT_KEY,
};
use pretty_assertions::assert_eq;

const TOKENS: &str = include_str!("fixtures/tokens.json");

fn compile() -> Vec<ThemeOutput> {
    let config = TokenConfig::default();
    let doc = ThemeDocument::parse_str(TOKENS, DEFAULT_ROOT_KEY, &config).unwrap();
    compile_document(&doc, &config)
}

fn theme<'a>(outputs: &'a [ThemeOutput], name: &str) -> &'a ThemeOutput {
    outputs
        .iter()
        .find(|o| o.name == name)
        .unwrap_or_else(|| panic!("theme {name} missing"))
}

#[test]
fn themes_compile_in_declaration_order() {
    let names: Vec<_> = compile().into_iter().map(|o| o.name).collect();
    assert_eq!(names, vec!["light", "dark"]);
}

#[test]
fn component_bundle_matches_expected_stylesheet() {
    let outputs = compile();
    let light = theme(&outputs, "light");
    assert_eq!(
        light.components.text,
        "\n:root,:host{\n\
         /***************** components *************************/\n\
         \n/* ----------- button -----------*/\n\
         \n/* ----------- bg -----------*/\n\
         --dm-component-button-bg-primary: var(--dm-token-palette-palette-blue-5);\n\
         \n/* ----------- border -----------*/\n\
         --dm-component-button-border-width: var(--dm-common-border-base-width);\n\
         \n/* ----------- radius -----------*/\n\
         --dm-component-button-radius-default: 6px;\n\
         \n/* ----------- input -----------*/\n\
         \n/* ----------- height -----------*/\n\
         --dm-component-input-height-default: 32px;\n\
         \n}\n"
    );
    assert_eq!(
        light.components.values_json().unwrap(),
        r#"{"--dm-component-button-bg-primary":"--dm-token-palette-palette-blue-5","--dm-component-button-border-width":"--dm-common-border-base-width","--dm-component-button-radius-default":"6px","--dm-component-input-height-default":"32px"}"#
    );
}

#[test]
fn palette_bundle_carries_palette_common_and_font() {
    let outputs = compile();
    let light = theme(&outputs, "light");
    let values = &light.palette.values;

    assert_eq!(values["--dm-token-palette-gray-10"], "#fafafa");
    assert_eq!(values["--dm-token-palette-blue-5"], "#1677ff");
    assert_eq!(
        values["--dm-common-background-page-color"],
        "--dm-token-palette-palette-gray-20"
    );
    assert_eq!(values["--dm-common-font-color-title-primary"], "rgba(0, 0, 0, 0.88)");
    assert_eq!(values["--dm-common-border-base-width"], "1px");
    assert_eq!(values["--cx-font-size-s-default"], "12");

    let text = &light.palette.text;
    assert!(text.starts_with("\n:root,:host{\n"));
    assert!(text.ends_with("\n}\n"));
    let palette_at = text.find("--dm-token-palette-gray-10: #fafafa;").unwrap();
    let common_at = text.find("--dm-common-background-card-color: #ffffff;").unwrap();
    let font_at = text.find("--cx-font-size-m-default: 14;").unwrap();
    assert!(palette_at < common_at && common_at < font_at);
}

#[test]
fn font_metrics_are_per_theme() {
    let outputs = compile();
    assert_eq!(theme(&outputs, "dark").palette.values["--cx-font-size-m-default"], "15");
    assert_eq!(theme(&outputs, "light").palette.values["--cx-font-size-m-default"], "14");
}

#[test]
fn lint_reports_palette_references_by_resolved_name() {
    let outputs = compile();
    let targets: Vec<_> = dangling_references(theme(&outputs, "light"))
        .into_iter()
        .map(|d| d.target)
        .collect();
    assert_eq!(
        targets,
        vec![
            "--dm-token-palette-palette-gray-20",
            "--dm-token-palette-palette-gray-10",
            "--dm-token-palette-palette-blue-5",
        ]
    );
}

#[tokio::test]
async fn every_theme_emits_four_artifacts() {
    let layout = ArtifactLayout::default();
    let artifacts: Vec<_> = compile()
        .iter()
        .flat_map(|o| o.artifacts(&layout).unwrap())
        .collect();
    let sink = Arc::new(MemorySink::new());
    let reports = emit(Arc::clone(&sink), artifacts).await;

    assert_eq!(reports.len(), 8);
    assert!(reports.iter().all(|r| r.is_ok()));
    let dark_json = sink.get("palette/dark.json").unwrap();
    assert!(dark_json.contains(r##""--dm-token-palette-gray-20":"#1f1f1f""##));
    assert!(sink.get("components/light.scss").unwrap().contains(":root,:host{"));
}
