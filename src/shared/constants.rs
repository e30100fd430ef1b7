// =============================================================================
// ROLE CONSTANTS
// =============================================================================

/// Platform operator; passes every guard
pub const ROLE_SUPER_ADMIN: &str = "super_admin";

/// NGO administrator who creates and manages camps
pub const ROLE_ORG_ADMIN: &str = "org_admin";

/// Health sciences student acting as a camp administrator
pub const ROLE_HEALTH_STUDENT: &str = "health_student";

/// Roles that may manage camps, registrations and feedback
pub const ADMIN_ROLES: [&str; 3] = [ROLE_SUPER_ADMIN, ROLE_ORG_ADMIN, ROLE_HEALTH_STUDENT];

// =============================================================================
// UPLOADS
// =============================================================================

/// Largest accepted document upload (10 MiB)
pub const MAX_DOCUMENT_SIZE: usize = 10 * 1024 * 1024;

/// Public emergency number returned by the SOS endpoint
pub const EMERGENCY_NUMBER: &str = "112";

/// Statewide SOS helpline
pub const SOS_HELPLINE: &str = "108";

/// Ambulance helpline
pub const AMBULANCE_HELPLINE: &str = "102";
