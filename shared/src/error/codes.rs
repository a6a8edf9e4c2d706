//! Unified error codes for TechCasePro
//!
//! Error codes are organized by category:
//! - 0xxx: General request errors
//! - 1xxx: Authentication errors
//! - 2xxx: Permission errors
//! - 4xxx: Sale / checkout errors
//! - 5xxx: Payment method errors
//! - 6xxx: Catalog errors (products, categories)
//! - 8xxx: Seller errors
//! - 9xxx: System errors

use serde::{Deserialize, Serialize};
use std::fmt;

/// Unified error code enum
///
/// Represented as u16 values so the code survives serialization unchanged.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u16", try_from = "u16")]
#[repr(u16)]
pub enum ErrorCode {
    // ==================== 0xxx: General ====================
    /// Invalid request
    InvalidRequest = 5,

    // ==================== 1xxx: Auth ====================
    /// User is not authenticated
    NotAuthenticated = 1001,
    /// Invalid credentials (username/password)
    InvalidCredentials = 1002,

    // ==================== 2xxx: Permission ====================
    /// Specific role required
    RoleRequired = 2002,
    /// Admin role required
    AdminRequired = 2003,

    // ==================== 4xxx: Sale ====================
    /// Cart has no items
    CartEmpty = 4001,
    /// Checkout form is incomplete
    CheckoutIncomplete = 4004,

    // ==================== 5xxx: Payment ====================
    /// Payment method configuration not found
    PaymentMethodNotFound = 5001,
    /// No payment method is active
    NoPaymentMethodAvailable = 5002,
    /// Selected payment method is not active
    PaymentMethodInactive = 5003,

    // ==================== 6xxx: Catalog ====================
    /// Product not found
    ProductNotFound = 6001,
    /// Product price is invalid
    ProductInvalidPrice = 6002,
    /// Category not found
    CategoryNotFound = 6101,

    // ==================== 8xxx: Seller ====================
    /// Seller not found
    SellerNotFound = 8001,

    // ==================== 9xxx: System ====================
    /// Internal error
    InternalError = 9001,
    /// Storage backend error
    DatabaseError = 9002,
}

impl ErrorCode {
    /// Get the numeric code
    #[inline]
    pub const fn code(&self) -> u16 {
        *self as u16
    }

    /// Default human-readable message
    pub const fn message(&self) -> &'static str {
        match self {
            ErrorCode::InvalidRequest => "Invalid request",

            ErrorCode::NotAuthenticated => "User is not authenticated",
            ErrorCode::InvalidCredentials => "Invalid username or password",

            ErrorCode::RoleRequired => "Specific role is required",
            ErrorCode::AdminRequired => "Administrator role is required",

            ErrorCode::CartEmpty => "Cart is empty",
            ErrorCode::CheckoutIncomplete => "Checkout form is incomplete",

            ErrorCode::PaymentMethodNotFound => "Payment method not found",
            ErrorCode::NoPaymentMethodAvailable => "No payment method available",
            ErrorCode::PaymentMethodInactive => "Payment method is not active",

            ErrorCode::ProductNotFound => "Product not found",
            ErrorCode::ProductInvalidPrice => "Product price is invalid",
            ErrorCode::CategoryNotFound => "Category not found",

            ErrorCode::SellerNotFound => "Seller not found",

            ErrorCode::InternalError => "Internal error",
            ErrorCode::DatabaseError => "Storage error",
        }
    }
}

impl From<ErrorCode> for u16 {
    #[inline]
    fn from(code: ErrorCode) -> Self {
        code.code()
    }
}

/// Error when converting from an invalid u16 to ErrorCode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InvalidErrorCode(pub u16);

impl fmt::Display for InvalidErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "invalid error code: {}", self.0)
    }
}

impl std::error::Error for InvalidErrorCode {}

impl TryFrom<u16> for ErrorCode {
    type Error = InvalidErrorCode;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        match value {
            5 => Ok(ErrorCode::InvalidRequest),

            1001 => Ok(ErrorCode::NotAuthenticated),
            1002 => Ok(ErrorCode::InvalidCredentials),

            2002 => Ok(ErrorCode::RoleRequired),
            2003 => Ok(ErrorCode::AdminRequired),

            4001 => Ok(ErrorCode::CartEmpty),
            4004 => Ok(ErrorCode::CheckoutIncomplete),

            5001 => Ok(ErrorCode::PaymentMethodNotFound),
            5002 => Ok(ErrorCode::NoPaymentMethodAvailable),
            5003 => Ok(ErrorCode::PaymentMethodInactive),

            6001 => Ok(ErrorCode::ProductNotFound),
            6002 => Ok(ErrorCode::ProductInvalidPrice),
            6101 => Ok(ErrorCode::CategoryNotFound),

            8001 => Ok(ErrorCode::SellerNotFound),

            9001 => Ok(ErrorCode::InternalError),
            9002 => Ok(ErrorCode::DatabaseError),

            _ => Err(InvalidErrorCode(value)),
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
