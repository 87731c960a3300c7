/*!
 * Tests for prompt catalog file loading
 */

use std::collections::HashMap;
use std::io::Write;

use tempfile::NamedTempFile;

use hotbrief::prompts::manager::TRANSLATE_SUMMARIZE_TASK;
use hotbrief::prompts::PromptManager;

const CATALOG_JSON: &str = r#"{
    "tasks": {
        "translate_summarize": {
            "default": {
                "system": "Custom system prompt",
                "user": "Handle {count} titles:\n{titles}"
            },
            "models": {
                "qwen": {
                    "user": "Qwen variant: {titles}"
                }
            }
        }
    }
}"#;

fn write_catalog(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_promptManager_fromFile_shouldLoadCatalog() {
    let file = write_catalog(CATALOG_JSON);
    let manager = PromptManager::from_file(file.path()).unwrap();

    let mut variables = HashMap::new();
    variables.insert("count".to_string(), "2".to_string());
    variables.insert("titles".to_string(), "1. A\n2. B".to_string());

    let prompt = manager
        .get_prompt(TRANSLATE_SUMMARIZE_TASK, Some("deepseek-ai/DeepSeek-V3"), &variables)
        .unwrap();

    assert_eq!(prompt.system, "Custom system prompt");
    assert_eq!(prompt.user, "Handle 2 titles:\n1. A\n2. B");
}

#[test]
fn test_promptManager_fromFile_shouldApplyFamilyOverride() {
    let file = write_catalog(CATALOG_JSON);
    let manager = PromptManager::from_file(file.path()).unwrap();

    let mut variables = HashMap::new();
    variables.insert("titles".to_string(), "1. A".to_string());

    let prompt = manager
        .get_prompt(TRANSLATE_SUMMARIZE_TASK, Some("Qwen2.5-72B"), &variables)
        .unwrap();

    assert_eq!(prompt.user, "Qwen variant: 1. A");
    // The override only replaced the user half
    assert_eq!(prompt.system, "Custom system prompt");
}

#[test]
fn test_promptManager_fromFile_shouldReplaceBuiltinTasks() {
    // A catalog file defines the whole task set: built-ins are gone
    let file = write_catalog(r#"{"tasks": {"other_task": {}}}"#);
    let manager = PromptManager::from_file(file.path()).unwrap();

    assert!(manager
        .get_prompt(TRANSLATE_SUMMARIZE_TASK, None, &HashMap::new())
        .is_err());
    assert_eq!(manager.task_names(), vec!["other_task"]);
}

#[test]
fn test_promptManager_fromFile_withInvalidJson_shouldFail() {
    let file = write_catalog("{not json");
    assert!(PromptManager::from_file(file.path()).is_err());
}

#[test]
fn test_promptManager_fromFile_withMissingFile_shouldFail() {
    assert!(PromptManager::from_file("/nonexistent/prompts.json").is_err());
}
