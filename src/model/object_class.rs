use std::fmt;

/// PKCS#11 object handle handed out by the directory.
///
/// Handles are derived from the object class on every lookup and never
/// stored on the secure element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectHandle(u64);

impl ObjectHandle {
    /// PKCS#11 never uses 0 as an object handle.
    pub const INVALID: Self = Self(0);

    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    pub const fn value(self) -> u64 {
        self.0
    }

    pub const fn is_valid(self) -> bool {
        self.0 != Self::INVALID.0
    }
}

impl fmt::Display for ObjectHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<ObjectHandle> for u64 {
    fn from(handle: ObjectHandle) -> Self {
        handle.0
    }
}

/// The four objects a device exposes to the token interface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ObjectClass {
    DeviceCertificate,
    DevicePrivateKey,
    DevicePublicKey,
    CodeVerificationKey,
}

impl ObjectClass {
    /// Classification order used when matching labels.
    pub const ALL: [ObjectClass; 4] = [
        ObjectClass::DeviceCertificate,
        ObjectClass::DevicePrivateKey,
        ObjectClass::DevicePublicKey,
        ObjectClass::CodeVerificationKey,
    ];

    pub const fn handle(self) -> ObjectHandle {
        match self {
            ObjectClass::DevicePrivateKey => ObjectHandle(1),
            ObjectClass::DevicePublicKey => ObjectHandle(2),
            ObjectClass::DeviceCertificate => ObjectHandle(3),
            ObjectClass::CodeVerificationKey => ObjectHandle(4),
        }
    }

    /// Position in [`ObjectClass::ALL`]
    pub const fn index(self) -> usize {
        match self {
            ObjectClass::DeviceCertificate => 0,
            ObjectClass::DevicePrivateKey => 1,
            ObjectClass::DevicePublicKey => 2,
            ObjectClass::CodeVerificationKey => 3,
        }
    }

    pub fn from_handle(handle: ObjectHandle) -> Option<Self> {
        Self::ALL.into_iter().find(|class| class.handle() == handle)
    }

    /// Whether the object's bytes may cross the secure element boundary.
    ///
    /// The private key is generated on chip and only ever used in place.
    pub const fn is_transferable(self) -> bool {
        !matches!(self, ObjectClass::DevicePrivateKey)
    }

    pub const fn name(self) -> &'static str {
        match self {
            ObjectClass::DeviceCertificate => "device certificate",
            ObjectClass::DevicePrivateKey => "device private key",
            ObjectClass::DevicePublicKey => "device public key",
            ObjectClass::CodeVerificationKey => "code verification key",
        }
    }
}

impl fmt::Display for ObjectClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
