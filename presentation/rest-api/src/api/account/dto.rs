use poem_openapi::Object;

#[derive(Debug, Clone, Object)]
pub struct RequestCodeRequest {
    /// Address the code is issued for; delivery happens out of band
    pub email: String,
}

#[derive(Debug, Clone, Object)]
pub struct ConfirmCodeRequest {
    /// Address the code was issued for
    pub email: String,
    /// Six-digit verification code
    pub code: String,
}

#[derive(Debug, Clone, Object)]
pub struct CodeRequestedResponse {
    /// Seconds until the issued code expires
    pub expires_in_seconds: u64,
}
