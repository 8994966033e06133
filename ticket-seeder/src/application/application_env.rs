use anyhow::anyhow;

pub enum FirestoreEnv {
    Cloud {
        credentials_path: String,
        /// Overrides project id from credentials file
        project_id: Option<String>,
    },
    Emulator {
        host: String,
        project_id: String,
    },
}

pub struct ApplicationEnv {
    pub log_directory: String,
    pub log_filename: String,

    pub user_ids: Vec<String>,

    pub firestore: FirestoreEnv,

    pub events_path: Option<String>,
    pub random_seed: Option<u64>,
}

impl ApplicationEnv {
    pub fn parse() -> anyhow::Result<Self> {
        let log_directory = Self::env_var("TICKET_SEEDER_LOG_DIRECTORY")?;
        let log_filename = Self::env_var("TICKET_SEEDER_LOG_FILENAME")?;
        let user_ids = parse_user_ids(&Self::env_var("TICKET_SEEDER_USER_IDS")?)?;
        let project_id = Self::optional_env_var("TICKET_SEEDER_PROJECT_ID");
        let firestore = match Self::optional_env_var("FIRESTORE_EMULATOR_HOST") {
            Some(host) => FirestoreEnv::Emulator {
                host,
                project_id: project_id.ok_or(anyhow!(
                    "TICKET_SEEDER_PROJECT_ID must be set when FIRESTORE_EMULATOR_HOST is set"
                ))?,
            },
            None => FirestoreEnv::Cloud {
                credentials_path: Self::env_var("TICKET_SEEDER_CREDENTIALS_PATH")?,
                project_id,
            },
        };
        let events_path = Self::optional_env_var("TICKET_SEEDER_EVENTS_PATH");
        let random_seed = Self::optional_env_var("TICKET_SEEDER_RANDOM_SEED")
            .map(|seed| seed.parse())
            .transpose()?;

        Ok(Self {
            log_directory,
            log_filename,
            user_ids,
            firestore,
            events_path,
            random_seed,
        })
    }

    fn env_var(name: &'static str) -> anyhow::Result<String> {
        std::env::var(name).map_err(|_| anyhow!("environment variable {name} not set"))
    }

    fn optional_env_var(name: &'static str) -> Option<String> {
        std::env::var(name).ok().filter(|value| !value.is_empty())
    }
}

///
/// Parses comma separated list of user ids, order is preserved
///
fn parse_user_ids(user_ids: &str) -> anyhow::Result<Vec<String>> {
    let user_ids = user_ids
        .split(',')
        .map(str::trim)
        .filter(|user_id| !user_id.is_empty())
        .map(str::to_string)
        .collect::<Vec<_>>();

    if user_ids.is_empty() {
        return Err(anyhow!("TICKET_SEEDER_USER_IDS need to contain at least one user id"));
    }

    Ok(user_ids)
}
