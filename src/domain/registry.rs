use crate::domain::model::Antenna;
use crate::utils::error::{GridError, Result};

/// 指向 registry 內某筆天線的穩定識別碼，移除其他天線後仍然有效
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RegistryHandle(u64);

#[derive(Debug, Clone)]
struct Entry {
    id: u64,
    antenna: Antenna,
}

/// 依插入順序保存天線的集合。
///
/// 走訪順序為「最新插入者優先」：新天線成為邏輯上的頭。
/// 內部以 `Vec` 依插入先後存放，走訪時反向讀取，
/// 因此插入為 O(1)，移除為保持順序的 shift delete。
#[derive(Debug, Clone, Default)]
pub struct AntennaRegistry {
    entries: Vec<Entry>,
    next_id: u64,
}

impl AntennaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// 新增天線並使其成為頭。記憶體不足時回傳 `AllocationFailure`，registry 維持原狀。
    pub fn insert(&mut self, frequency: char, x: i32, y: i32) -> Result<RegistryHandle> {
        self.entries
            .try_reserve(1)
            .map_err(|_| GridError::AllocationFailure)?;

        let id = self.next_id;
        self.next_id += 1;
        self.entries.push(Entry {
            id,
            antenna: Antenna::new(frequency, x, y),
        });
        Ok(RegistryHandle(id))
    }

    /// 依目前走訪順序移除第一筆 (frequency, x, y) 完全相符的天線。
    /// 找不到時不做任何事。
    pub fn remove(&mut self, frequency: char, x: i32, y: i32) -> Option<Antenna> {
        let index = self
            .entries
            .iter()
            .rposition(|entry| entry.antenna.matches(frequency, x, y))?;
        Some(self.entries.remove(index).antenna)
    }

    pub fn get(&self, handle: RegistryHandle) -> Option<&Antenna> {
        self.entries
            .iter()
            .find(|entry| entry.id == handle.0)
            .map(|entry| &entry.antenna)
    }

    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Antenna> + ExactSizeIterator + '_ {
        self.entries.iter().rev().map(|entry| &entry.antenna)
    }

    /// 不重複的頻率，依走訪時首次出現的順序
    pub fn frequencies(&self) -> Vec<char> {
        let mut seen = Vec::new();
        for antenna in self.iter() {
            if !seen.contains(&antenna.frequency) {
                seen.push(antenna.frequency);
            }
        }
        seen
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<'a> IntoIterator for &'a AntennaRegistry {
    type Item = &'a Antenna;
    type IntoIter = Box<dyn Iterator<Item = &'a Antenna> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// 依序插入，因此走訪順序與來源順序相反
impl FromIterator<Antenna> for AntennaRegistry {
    fn from_iter<I: IntoIterator<Item = Antenna>>(iter: I) -> Self {
        let mut registry = AntennaRegistry::new();
        for antenna in iter {
            let id = registry.next_id;
            registry.next_id += 1;
            registry.entries.push(Entry { id, antenna });
        }
        registry
    }
}
