type IdentifierInnerType = u16;

/// ICMP echo identifier, one per process.
#[derive(Copy, Clone, Debug, Eq, Hash, PartialEq)]
pub struct Identifier(IdentifierInnerType);

impl Identifier {
    /// Folds the process id to the 16 bits available in the echo header.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn from_process() -> Self {
        Identifier((std::process::id() & 0xFFFF) as IdentifierInnerType)
    }
}

impl From<Identifier> for IdentifierInnerType {
    fn from(value: Identifier) -> Self {
        value.0
    }
}

impl From<IdentifierInnerType> for Identifier {
    fn from(value: IdentifierInnerType) -> Self {
        Identifier(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_process_is_stable() {
        assert_eq!(Identifier::from_process(), Identifier::from_process());
    }

    #[test]
    fn from_process_keeps_low_bits_of_pid() {
        let pid = std::process::id();
        assert_eq!(pid & 0xFFFF, u32::from(u16::from(Identifier::from_process())));
    }
}
