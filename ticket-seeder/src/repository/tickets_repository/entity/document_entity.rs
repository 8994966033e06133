use serde::Deserialize;

#[derive(Deserialize)]
pub struct DocumentEntity {
    /// `projects/{project}/databases/{database}/documents/{path}/{id}`
    pub name: String,
}

impl DocumentEntity {
    pub fn id(&self) -> Option<&str> {
        self.name
            .rsplit_once('/')
            .map(|(_, id)| id)
            .filter(|id| !id.is_empty())
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListDocumentsEntity {
    /// Missing when collection is empty
    #[serde(default)]
    pub documents: Vec<DocumentEntity>,
    pub next_page_token: Option<String>,
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn id_last_path_segment() {
        let document = DocumentEntity {
            name: "projects/p/databases/(default)/documents/users/u1/tickets/AbC123".to_string(),
        };

        assert_eq!(document.id(), Some("AbC123"));
    }

    #[test]
    fn id_malformed_name() {
        let without_slash = DocumentEntity {
            name: "tickets".to_string(),
        };
        let trailing_slash = DocumentEntity {
            name: "users/u1/tickets/".to_string(),
        };

        assert_eq!(without_slash.id(), None);
        assert_eq!(trailing_slash.id(), None);
    }

    #[test]
    fn list_empty_collection() {
        let list = serde_json::from_str::<ListDocumentsEntity>("{}").unwrap();

        assert!(list.documents.is_empty());
        assert!(list.next_page_token.is_none());
    }
}
