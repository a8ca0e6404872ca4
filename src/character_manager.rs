//! Flat-file character persistence.
//!
//! Each character is stored as a pretty-printed JSON file under
//! `~/.quest_chronicles/`. Corrupted files are flagged in listings rather
//! than failing the whole listing.

use std::fs;
use std::io;
use std::path::PathBuf;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::character::{Character, Class};

#[derive(Clone, Serialize, Deserialize)]
struct CharacterSaveData {
    version: u32,
    saved_at: i64,
    character: Character,
}

#[derive(Debug, Clone)]
pub struct CharacterInfo {
    pub character_name: String,
    pub filename: String,
    pub class: Class,
    pub level: u32,
    pub gold: u32,
    pub saved_at: i64,
    pub is_corrupted: bool,
}

pub struct CharacterManager {
    save_dir: PathBuf,
}

impl CharacterManager {
    pub fn new() -> io::Result<Self> {
        let home_dir = dirs::home_dir().ok_or_else(|| {
            io::Error::new(
                io::ErrorKind::NotFound,
                "Could not determine home directory",
            )
        })?;

        let save_dir = home_dir.join(".quest_chronicles");
        fs::create_dir_all(&save_dir)?;

        Ok(Self { save_dir })
    }

    pub fn save_character(&self, character: &Character) -> io::Result<()> {
        let save_data = CharacterSaveData {
            version: 1,
            saved_at: Utc::now().timestamp(),
            character: character.clone(),
        };

        let json = serde_json::to_string_pretty(&save_data)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        let filename = format!("{}.json", sanitize_name(&character.name));
        let filepath = self.save_dir.join(filename);
        fs::write(filepath, json)?;

        Ok(())
    }

    pub fn load_character(&self, filename: &str) -> io::Result<Character> {
        let filepath = self.save_dir.join(filename);
        let json_content = fs::read_to_string(filepath)?;

        let save_data: CharacterSaveData = serde_json::from_str(&json_content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(save_data.character)
    }

    pub fn list_characters(&self) -> io::Result<Vec<CharacterInfo>> {
        let mut characters = Vec::new();

        let entries = fs::read_dir(&self.save_dir)?;
        for entry in entries {
            let entry = entry?;
            let path = entry.path();

            if path.extension().and_then(|s| s.to_str()) != Some("json") {
                continue;
            }

            let filename = path
                .file_name()
                .and_then(|s| s.to_str())
                .unwrap_or("")
                .to_string();

            match self.load_info(&filename) {
                Ok(info) => characters.push(info),
                Err(_) => characters.push(CharacterInfo {
                    character_name: "[CORRUPTED]".to_string(),
                    filename,
                    class: Class::Warrior,
                    level: 0,
                    gold: 0,
                    saved_at: 0,
                    is_corrupted: true,
                }),
            }
        }

        // Most recently saved first.
        characters.sort_by(|a, b| b.saved_at.cmp(&a.saved_at));

        Ok(characters)
    }

    fn load_info(&self, filename: &str) -> io::Result<CharacterInfo> {
        let filepath = self.save_dir.join(filename);
        let json_content = fs::read_to_string(filepath)?;
        let save_data: CharacterSaveData = serde_json::from_str(&json_content)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        Ok(CharacterInfo {
            character_name: save_data.character.name.clone(),
            filename: filename.to_string(),
            class: save_data.character.class,
            level: save_data.character.level,
            gold: save_data.character.gold,
            saved_at: save_data.saved_at,
            is_corrupted: false,
        })
    }

    pub fn delete_character(&self, filename: &str) -> io::Result<()> {
        let filepath = self.save_dir.join(filename);
        fs::remove_file(filepath)?;
        Ok(())
    }
}

pub fn validate_name(name: &str) -> Result<(), String> {
    let trimmed = name.trim();

    if trimmed.is_empty() {
        return Err("Name cannot be empty".to_string());
    }

    if trimmed.len() > 16 {
        return Err("Name must be 16 characters or less".to_string());
    }

    let valid_chars = trimmed
        .chars()
        .all(|c| c.is_alphanumeric() || c == ' ' || c == '-' || c == '_');

    if !valid_chars {
        return Err(
            "Name can only contain letters, numbers, spaces, hyphens, and underscores".to_string(),
        );
    }

    Ok(())
}

pub fn sanitize_name(name: &str) -> String {
    name.trim()
        .to_lowercase()
        .replace(' ', "_")
        .chars()
        .filter(|c| c.is_alphanumeric() || *c == '_' || *c == '-')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_name_valid() {
        assert!(validate_name("Hero").is_ok());
        assert!(validate_name("Test 123").is_ok());
        assert!(validate_name("Warrior-2").is_ok());
    }

    #[test]
    fn test_validate_name_rejects_empty_and_long() {
        assert!(validate_name("").is_err());
        assert!(validate_name("   ").is_err());
        assert!(validate_name("12345678901234567").is_err()); // 17 chars
    }

    #[test]
    fn test_validate_name_rejects_symbols() {
        assert!(validate_name("test@123").is_err());
        assert!(validate_name("hello!world").is_err());
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("Hero"), "hero");
        assert_eq!(sanitize_name("Mage the Great"), "mage_the_great");
        assert_eq!(sanitize_name("Test!!!"), "test");
        assert_eq!(sanitize_name("   Spaces   "), "spaces");
    }

    #[test]
    fn test_save_and_load_character() {
        let manager = CharacterManager::new().unwrap();

        let mut character = Character::new("SaveLoadTest".to_string(), Class::Rogue);
        character.level = 4;
        character.gold = 77;
        character.inventory.push("potion".to_string());
        character.active_quests.push("goblin_menace".to_string());

        manager.save_character(&character).expect("Failed to save");

        let filename = format!("{}.json", sanitize_name(&character.name));
        let loaded = manager.load_character(&filename).expect("Failed to load");
        assert_eq!(loaded.name, "SaveLoadTest");
        assert_eq!(loaded.class, Class::Rogue);
        assert_eq!(loaded.level, 4);
        assert_eq!(loaded.gold, 77);
        assert_eq!(loaded.inventory, vec!["potion"]);
        assert_eq!(loaded.active_quests, vec!["goblin_menace"]);

        fs::remove_file(manager.save_dir.join(filename)).ok();
    }

    #[test]
    fn test_list_flags_corrupted_saves() {
        let manager = CharacterManager::new().unwrap();

        let filepath = manager.save_dir.join("corrupt_listing_test.json");
        fs::write(&filepath, "{ not json").unwrap();

        let list = manager.list_characters().expect("Failed to list");
        let entry = list
            .iter()
            .find(|c| c.filename == "corrupt_listing_test.json")
            .expect("corrupted file missing from listing");
        assert!(entry.is_corrupted);
        assert_eq!(entry.character_name, "[CORRUPTED]");

        fs::remove_file(filepath).ok();
    }

    #[test]
    fn test_delete_character() {
        let manager = CharacterManager::new().unwrap();

        let character = Character::new("DeleteTest".to_string(), Class::Mage);
        manager.save_character(&character).unwrap();

        let filename = "deletetest.json";
        assert!(manager.save_dir.join(filename).exists());

        manager.delete_character(filename).expect("Delete failed");
        assert!(!manager.save_dir.join(filename).exists());
    }
}
