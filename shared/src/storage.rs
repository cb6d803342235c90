//! 存储适配层
//!
//! `StringStore` 是数据层与底层键值介质（浏览器 LocalStorage、
//! 测试用内存表）之间的唯一接缝；`JsonStorage` 在其上叠加
//! serde_json 编解码，并承诺 `load` 永不失败：缺失、损坏或
//! 显式的 JSON `null` 一律回落到调用方提供的默认值。

use serde::{Serialize, de::DeserializeOwned};
use std::cell::RefCell;
use std::collections::HashMap;

// =========================================================
// 抽象接口定义
// =========================================================

/// 字符串键值存储
///
/// 写入操作返回是否成功，失败不携带原因（尽力而为的语义，
/// 与浏览器存储的行为一致）。
pub trait StringStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str) -> bool;
    fn delete(&self, key: &str) -> bool;
}

// 引用天然满足 StringStore，方便测试中在多个 JsonStorage
// 之间共享同一个底层介质
impl<S: StringStore> StringStore for &S {
    fn get(&self, key: &str) -> Option<String> {
        (*self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> bool {
        (*self).set(key, value)
    }

    fn delete(&self, key: &str) -> bool {
        (*self).delete(key)
    }
}

// =========================================================
// JSON 适配器
// =========================================================

/// JSON 编解码适配器
pub struct JsonStorage<S: StringStore> {
    backend: S,
}

impl<S: StringStore> JsonStorage<S> {
    pub fn new(backend: S) -> Self {
        Self { backend }
    }

    /// 读取并解码指定键
    ///
    /// # 返回
    /// - 键不存在、解码失败、或存储的是 JSON `null` 时返回 `default`
    /// - 永不 panic，也不向调用方暴露错误
    pub fn load<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let Some(text) = self.backend.get(key) else {
            return default;
        };
        match serde_json::from_str::<Option<T>>(&text) {
            Ok(Some(value)) => value,
            Ok(None) | Err(_) => default,
        }
    }

    /// 编码并写入指定键（尽力而为）
    pub fn save<T: Serialize>(&self, key: &str, value: &T) -> bool {
        match serde_json::to_string(value) {
            Ok(text) => self.backend.set(key, &text),
            Err(_) => false,
        }
    }

    /// 删除指定键
    pub fn delete(&self, key: &str) -> bool {
        self.backend.delete(key)
    }
}

// =========================================================
// 内存实现 (MemoryStore)
// =========================================================

/// 内存键值表
///
/// 存储序列化后的 JSON 字符串，模拟真实存储的序列化边界。
/// 测试中的标准后端。
#[derive(Default)]
pub struct MemoryStore {
    map: RefCell<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// 当前存储的条目数
    pub fn len(&self) -> usize {
        self.map.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.borrow().is_empty()
    }
}

impl StringStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.map.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) -> bool {
        self.map
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        true
    }

    fn delete(&self, key: &str) -> bool {
        self.map.borrow_mut().remove(key).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_missing_key_returns_default() {
        let mem = MemoryStore::new();
        let storage = JsonStorage::new(&mem);
        let loaded: Vec<String> = storage.load("absent", vec!["fallback".to_string()]);
        assert_eq!(loaded, vec!["fallback".to_string()]);
    }

    #[test]
    fn test_load_corrupt_json_returns_default() {
        let mem = MemoryStore::new();
        mem.set("broken", "{not json");
        let storage = JsonStorage::new(&mem);
        let loaded: Vec<u64> = storage.load("broken", vec![7]);
        assert_eq!(loaded, vec![7]);
    }

    #[test]
    fn test_load_stored_null_returns_default() {
        // 存量数据中出现过字面量 null，不能解读为合法集合
        let mem = MemoryStore::new();
        mem.set("nulled", "null");
        let storage = JsonStorage::new(&mem);
        let loaded: Vec<u64> = storage.load("nulled", vec![1, 2]);
        assert_eq!(loaded, vec![1, 2]);
    }

    #[test]
    fn test_load_wrong_shape_returns_default() {
        let mem = MemoryStore::new();
        mem.set("shape", "\"a plain string\"");
        let storage = JsonStorage::new(&mem);
        let loaded: Vec<u64> = storage.load("shape", Vec::new());
        assert!(loaded.is_empty());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let mem = MemoryStore::new();
        let storage = JsonStorage::new(&mem);
        let value = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        assert!(storage.save("list", &value));
        let loaded: Vec<String> = storage.load("list", Vec::new());
        assert_eq!(loaded, value);
    }

    #[test]
    fn test_delete_removes_entry() {
        let mem = MemoryStore::new();
        let storage = JsonStorage::new(&mem);
        storage.save("gone", &1u8);
        assert!(storage.delete("gone"));
        assert!(!storage.delete("gone"));
        let loaded: u8 = storage.load("gone", 9);
        assert_eq!(loaded, 9);
    }
}
