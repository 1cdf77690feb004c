//! Scriptable in-memory host for engine tests.

use anyhow::{anyhow, bail, Result};
use reorder_core::{BufferHandle, BufferHost, BufferInfo};

pub(crate) struct TestHost {
    pub buffers: Vec<BufferInfo>,
    pub active: Option<BufferHandle>,
    pub auto_save: bool,
    pub saved: Vec<BufferHandle>,
    pub moves: usize,
    pub focus_calls: usize,
    pub fail_list: bool,
    pub fail_save: bool,
    pub fail_move: bool,
    /// Active-buffer queries fail once a move has happened
    pub fail_active_after_move: bool,
    /// Host loses focus on every move (exercises focus restoration)
    pub drop_focus_on_move: bool,
}

impl TestHost {
    /// Buffers get handles 1..=n in the given order; `active` is an index.
    pub fn new(names: &[&str], active: usize) -> Self {
        let buffers: Vec<BufferInfo> = names
            .iter()
            .enumerate()
            .map(|(i, name)| BufferInfo::new(BufferHandle(i as u32 + 1), *name, false))
            .collect();
        let active = buffers.get(active).map(|b| b.handle);
        Self {
            buffers,
            active,
            auto_save: false,
            saved: Vec::new(),
            moves: 0,
            focus_calls: 0,
            fail_list: false,
            fail_save: false,
            fail_move: false,
            fail_active_after_move: false,
            drop_focus_on_move: false,
        }
    }

    pub fn names(&self) -> Vec<&str> {
        self.buffers.iter().map(|b| b.name.as_str()).collect()
    }

    pub fn active_name(&self) -> Option<&str> {
        let active = self.active?;
        self.buffers
            .iter()
            .find(|b| b.handle == active)
            .map(|b| b.name.as_str())
    }

    pub fn set_modified(&mut self, name: &str) {
        if let Some(b) = self.buffers.iter_mut().find(|b| b.name == name) {
            b.modified = true;
        }
    }

    fn position(&self, handle: BufferHandle) -> Result<usize> {
        self.buffers
            .iter()
            .position(|b| b.handle == handle)
            .ok_or_else(|| anyhow!("Buffer {} does not exist", handle))
    }
}

impl BufferHost for TestHost {
    fn listed_buffers(&self) -> Result<Vec<BufferInfo>> {
        if self.fail_list {
            bail!("host unavailable");
        }
        Ok(self.buffers.clone())
    }

    fn active_buffer(&self) -> Result<Option<BufferHandle>> {
        if self.fail_active_after_move && self.moves > 0 {
            bail!("host unavailable");
        }
        Ok(self.active)
    }

    fn allow_auto_save(&self) -> bool {
        self.auto_save
    }

    fn move_buffer(&mut self, handle: BufferHandle, position: usize) -> Result<()> {
        if self.fail_move {
            bail!("buffer list changed");
        }
        let from = self.position(handle)?;
        let entry = self.buffers.remove(from);
        self.buffers.insert(position, entry);
        self.moves += 1;
        if self.drop_focus_on_move {
            self.active = self.buffers.first().map(|b| b.handle);
        }
        Ok(())
    }

    fn save_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        if self.fail_save {
            bail!("permission denied");
        }
        let index = self.position(handle)?;
        self.buffers[index].modified = false;
        self.saved.push(handle);
        Ok(())
    }

    fn focus_buffer(&mut self, handle: BufferHandle) -> Result<()> {
        self.position(handle)?;
        self.active = Some(handle);
        self.focus_calls += 1;
        Ok(())
    }
}
