use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, LazyLock};

static GLOBAL: LazyLock<InstanceSlot> = LazyLock::new(InstanceSlot::new);

/// Slot value meaning no recognizer holds it.
const FREE: u64 = 0;

#[derive(Debug, Default)]
struct SlotState {
    /// Generation of the current holder, or `FREE`.
    holder: AtomicU64,
    /// Last generation handed out.
    generation: AtomicU64,
}

/// A single-occupancy slot a [`Recognizer`](crate::Recognizer) must claim to exist.
///
/// [`InstanceSlot::global`] is shared by the whole process, which is what limits
/// a process to one live recognizer. Separate slots from [`InstanceSlot::new`]
/// are independent of it and of each other.
#[derive(Debug, Clone, Default)]
pub struct InstanceSlot {
    state: Arc<SlotState>,
}

impl InstanceSlot {
    pub fn new() -> Self {
        Self::default()
    }

    /// The process-wide slot.
    pub fn global() -> Self {
        GLOBAL.clone()
    }

    pub fn is_taken(&self) -> bool {
        self.state.holder.load(Ordering::Acquire) != FREE
    }

    /// Force the slot free. A recognizer still holding it keeps working, but
    /// dropping it no longer frees the slot, so a later claim stays protected.
    /// Only meant for tests that leaked one.
    pub fn reset(&self) {
        self.state.holder.store(FREE, Ordering::Release);
    }

    pub(crate) fn claim(&self) -> Option<SlotGuard> {
        let generation = self.state.generation.fetch_add(1, Ordering::AcqRel) + 1;
        self.state
            .holder
            .compare_exchange(FREE, generation, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| SlotGuard {
                slot: self.clone(),
                generation,
            })
    }
}

/// Frees its slot on drop, unless the slot was reset and claimed again since.
#[derive(Debug)]
pub(crate) struct SlotGuard {
    slot: InstanceSlot,
    generation: u64,
}

impl Drop for SlotGuard {
    fn drop(&mut self) {
        let _ = self.slot.state.holder.compare_exchange(
            self.generation,
            FREE,
            Ordering::AcqRel,
            Ordering::Acquire,
        );
    }
}
