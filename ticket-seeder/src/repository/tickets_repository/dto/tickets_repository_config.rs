pub struct TicketsRepositoryConfig {
    /// `https://firestore.googleapis.com` or `http://{emulator host}`
    pub base_url: String,
    pub project_id: String,
}
