use std::sync::{Arc, Mutex, OnceLock, PoisonError};

type SequenceNumberInnerType = u16;

#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct SequenceNumber(SequenceNumberInnerType);

impl SequenceNumber {
    fn start_value_inner_type() -> SequenceNumberInnerType {
        SequenceNumberInnerType::MIN
    }

    pub(crate) fn start_value() -> SequenceNumber {
        SequenceNumber(Self::start_value_inner_type())
    }

    pub(crate) fn max_value() -> SequenceNumberInnerType {
        SequenceNumberInnerType::MAX
    }

    #[must_use]
    pub(crate) fn next(self) -> Self {
        if self.0 == Self::max_value() {
            Self::start_value()
        } else {
            SequenceNumber(self.0 + 1)
        }
    }
}

impl From<SequenceNumber> for SequenceNumberInnerType {
    fn from(value: SequenceNumber) -> Self {
        value.0
    }
}

impl From<SequenceNumberInnerType> for SequenceNumber {
    fn from(value: SequenceNumberInnerType) -> Self {
        SequenceNumber(value)
    }
}

impl std::fmt::Display for SequenceNumber {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Hands out ICMP sequence numbers, `0, 1, ..., 65535, 0, ...`.
///
/// Sessions sharing one allocator never reuse a sequence number while the
/// other is still in flight, which keeps replies apart even though all
/// sessions of a process carry the same identifier.
#[derive(Debug)]
pub struct SequenceAllocator {
    next: Mutex<SequenceNumber>,
}

impl SequenceAllocator {
    #[must_use]
    pub fn new() -> Self {
        SequenceAllocator { next: Mutex::new(SequenceNumber::start_value()) }
    }

    /// The allocator shared by every session of this process.
    #[must_use]
    pub fn global() -> Arc<SequenceAllocator> {
        static GLOBAL: OnceLock<Arc<SequenceAllocator>> = OnceLock::new();
        GLOBAL.get_or_init(|| Arc::new(SequenceAllocator::new())).clone()
    }

    pub fn next(&self) -> SequenceNumber {
        // The guarded value is a plain integer, a panicking holder cannot leave it half-written.
        let mut next = self.next.lock().unwrap_or_else(PoisonError::into_inner);
        let sequence_number = *next;
        *next = sequence_number.next();
        sequence_number
    }
}

impl Default for SequenceAllocator {
    fn default() -> Self {
        Self::new()
    }
}
