//! Task name interning.
//!
//! Task names are mapped to dense integer ids in input order so the passes
//! can work on plain vectors instead of string-keyed maps.

use rustc_hash::FxHashMap;

/// Interned task id; also the task's position in input order.
pub type TaskId = u32;

/// Largest number of tasks whose positions all fit in a `TaskId`.
/// `TaskSet::insert` enforces it, so `idx as TaskId` never truncates.
pub const MAX_TASKS: usize = TaskId::MAX as usize;

/// Bidirectional task name <-> id mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskIndex {
    to_id: FxHashMap<String, TaskId>,
    names: Vec<String>,
}

impl TaskIndex {
    /// Build an index over `names`, assigning ids in iteration order.
    /// Repeated names keep the id of their first occurrence.
    pub fn new<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names = names.into_iter();
        let mut index = Self::with_capacity(names.size_hint().0);
        for name in names {
            index.intern(name.as_ref());
        }
        index
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_id: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            names: Vec::with_capacity(capacity),
        }
    }

    /// Intern a name, returning its id.
    pub fn intern(&mut self, name: &str) -> TaskId {
        if let Some(&id) = self.to_id.get(name) {
            return id;
        }
        debug_assert!(
            TaskId::try_from(self.names.len()).is_ok(),
            "task index exceeds TaskId range"
        );
        let id = self.names.len() as TaskId;
        self.names.push(name.to_string());
        self.to_id.insert(name.to_string(), id);
        id
    }

    #[inline]
    pub fn get_id(&self, name: &str) -> Option<TaskId> {
        self.to_id.get(name).copied()
    }

    /// Name for `id`. Ids handed out by this index are always valid.
    #[inline]
    pub fn name(&self, id: TaskId) -> &str {
        &self.names[id as usize]
    }

    /// All names in id order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
