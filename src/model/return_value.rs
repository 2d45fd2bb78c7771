use std::fmt;

/// Subset of PKCS#11 `CK_RV` codes the directory reports
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u64)]
pub enum ReturnValue {
    Ok = 0x0000_0000,
    FunctionFailed = 0x0000_0006,
    DeviceMemory = 0x0000_0031,
    KeyHandleInvalid = 0x0000_0060,
}

impl ReturnValue {
    pub const fn code(self) -> u64 {
        self as u64
    }

    pub const fn name(self) -> &'static str {
        match self {
            ReturnValue::Ok => "CKR_OK",
            ReturnValue::FunctionFailed => "CKR_FUNCTION_FAILED",
            ReturnValue::DeviceMemory => "CKR_DEVICE_MEMORY",
            ReturnValue::KeyHandleInvalid => "CKR_KEY_HANDLE_INVALID",
        }
    }
}

impl fmt::Display for ReturnValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({:#x})", self.name(), self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_match_pkcs11() {
        assert_eq!(ReturnValue::Ok.code(), 0);
        assert_eq!(ReturnValue::FunctionFailed.code(), 0x06);
        assert_eq!(ReturnValue::DeviceMemory.code(), 0x31);
        assert_eq!(ReturnValue::KeyHandleInvalid.code(), 0x60);
    }

    #[test]
    fn test_display() {
        assert_eq!(
            ReturnValue::KeyHandleInvalid.to_string(),
            "CKR_KEY_HANDLE_INVALID (0x60)"
        );
    }
}
