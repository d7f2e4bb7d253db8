const LANGUAGE_IDS: &[(&str, &str)] = &[
    (".json", "json"),
    (".md", "markdown"),
    (".ps1", "powershell"),
    (".sh", "shellscript"),
    (".bicep", "bicep"),
    (".yml", "yaml"),
    (".yaml", "yaml"),
];

const DEFAULT_LANGUAGE_ID: &str = "plaintext";

/// Maps a file name to the content-type tag used to display it.
/// Suffixes are matched case-insensitively and the first match wins.
pub fn language_id(file_name: &str) -> &'static str {
    let file_name = file_name.to_ascii_lowercase();
    LANGUAGE_IDS
        .iter()
        .find(|(suffix, _)| file_name.ends_with(suffix))
        .map_or(DEFAULT_LANGUAGE_ID, |&(_, id)| id)
}

#[test]
fn known_suffixes() {
    assert_eq!(language_id("azuredeploy.JSON"), "json");
    assert_eq!(language_id("readme.md"), "markdown");
    assert_eq!(language_id("Deploy.ps1"), "powershell");
    assert_eq!(language_id("setup.sh"), "shellscript");
    assert_eq!(language_id("main.bicep"), "bicep");
    assert_eq!(language_id("pipeline.yml"), "yaml");
    assert_eq!(language_id("values.YAML"), "yaml");
}

#[test]
fn unknown_suffix_is_plaintext() {
    assert_eq!(language_id("notes.txt"), "plaintext");
    assert_eq!(language_id("Makefile"), "plaintext");
    assert_eq!(language_id("json"), "plaintext");
}
