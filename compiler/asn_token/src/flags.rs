//! Quoted-string classification flags.

use bitflags::bitflags;

bitflags! {
    /// Which quoted-string sub-grammars a `cstring` literal is still
    /// compatible with.
    ///
    /// Flags start "all possibly true" when the opening quote is seen and
    /// are only ever cleared as disqualifying characters are scanned —
    /// membership is refined monotonically, never widened.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct StringFlags: u8 {
        /// Plain character string.
        const CSTRING = 1 << 0;
        /// 7-bit printable, single-line string.
        const SIMPLE_STRING = 1 << 1;
        /// Time-string candidate (no control or line-break characters).
        const TSTRING = 1 << 2;
    }
}

impl StringFlags {
    /// Initial state for a freshly opened quoted string.
    pub fn all_candidates() -> Self {
        Self::CSTRING | Self::SIMPLE_STRING | Self::TSTRING
    }
}

impl Default for StringFlags {
    fn default() -> Self {
        Self::empty()
    }
}
