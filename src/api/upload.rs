use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use reqwest::blocking::multipart::{Form, Part};
use tracing::debug;

use crate::api::client::ApiClient;
use crate::progress::{ProgressObserver, ProgressReader};

impl ApiClient {
    /// Upload a binary to an application build, streaming the file through
    /// the progress observer. The file handle is scoped to this call and
    /// released on every exit path.
    pub fn upload_file(
        &self,
        app_id: &str,
        filename: &Path,
        sandbox_id: Option<&str>,
        save_as: Option<&str>,
        observer: Box<dyn ProgressObserver>,
    ) -> Result<String> {
        let file = File::open(filename)
            .with_context(|| format!("Failed to open {}", filename.display()))?;
        let total_bytes = file
            .metadata()
            .with_context(|| format!("Failed to read metadata for {}", filename.display()))?
            .len();

        let file_name = filename
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();

        let mut form = Form::new().text("app_id", app_id.to_string());
        if let Some(sandbox_id) = sandbox_id {
            form = form.text("sandbox_id", sandbox_id.to_string());
        }
        if let Some(save_as) = save_as {
            form = form.text("save_as", save_as.to_string());
        }

        let reader = ProgressReader::new(file, total_bytes, observer);
        let part = Part::reader_with_length(reader, total_bytes)
            .file_name(file_name)
            .mime_str("application/binary")
            .context("Failed to set MIME type")?;
        form = form.part("file", part);

        let url = format!("{}/uploadfile.do", self.base_url);
        debug!(url = %url, total_bytes, "uploading file");

        let response = self
            .http
            .post(&url)
            .basic_auth(&self.credential.username, Some(&self.credential.password))
            .multipart(form)
            .send()
            .context("Failed to upload file")?;
        debug!(status = %response.status(), "response received");

        let body = response
            .text()
            .context("Failed to read upload response body")?;
        println!("{}", body);
        Ok(body)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;
    use std::sync::{Arc, Mutex};

    use wiremock::matchers::{method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;
    use crate::credentials::ApiCredential;

    struct Recorder(Arc<Mutex<Vec<(u64, u64)>>>);

    impl ProgressObserver for Recorder {
        fn notify(&self, bytes_sent: u64, total_bytes: u64) {
            self.0.lock().unwrap().push((bytes_sent, total_bytes));
        }
    }

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(ApiCredential {
            username: "jane".to_string(),
            password: "secret".to_string(),
        })
        .unwrap()
        .with_base_url(&server.uri())
    }

    fn upload_server(rt: &tokio::runtime::Runtime) -> MockServer {
        rt.block_on(async {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path("/uploadfile.do"))
                .respond_with(ResponseTemplate::new(200).set_body_string("<filelist/>"))
                .mount(&server)
                .await;
            server
        })
    }

    #[test]
    fn multipart_body_carries_fields_and_file() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = upload_server(&rt);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"binary payload bytes").unwrap();

        let samples = Arc::new(Mutex::new(Vec::new()));
        let body = client_for(&server)
            .upload_file(
                "1234",
                file.path(),
                Some("99"),
                Some("app.jar"),
                Box::new(Recorder(samples.clone())),
            )
            .unwrap();
        assert_eq!(body, "<filelist/>");

        let requests = rt.block_on(server.received_requests()).unwrap();
        assert_eq!(requests.len(), 1);
        let sent = String::from_utf8_lossy(&requests[0].body);
        assert!(sent.contains("name=\"app_id\""));
        assert!(sent.contains("1234"));
        assert!(sent.contains("name=\"sandbox_id\""));
        assert!(sent.contains("name=\"save_as\""));
        assert!(sent.contains("name=\"file\""));
        assert!(sent.contains("Content-Type: application/binary"));
        assert!(sent.contains("binary payload bytes"));
    }

    #[test]
    fn optional_fields_are_left_out_of_the_form() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = upload_server(&rt);

        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(b"payload").unwrap();

        let samples = Arc::new(Mutex::new(Vec::new()));
        client_for(&server)
            .upload_file("1234", file.path(), None, None, Box::new(Recorder(samples)))
            .unwrap();

        let requests = rt.block_on(server.received_requests()).unwrap();
        let sent = String::from_utf8_lossy(&requests[0].body);
        assert!(sent.contains("name=\"app_id\""));
        assert!(!sent.contains("name=\"sandbox_id\""));
        assert!(!sent.contains("name=\"save_as\""));
    }

    #[test]
    fn progress_covers_the_whole_file() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = upload_server(&rt);

        let payload = vec![42u8; 16 * 1024];
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&payload).unwrap();

        let samples = Arc::new(Mutex::new(Vec::new()));
        client_for(&server)
            .upload_file(
                "1234",
                file.path(),
                None,
                None,
                Box::new(Recorder(samples.clone())),
            )
            .unwrap();

        let samples = samples.lock().unwrap();
        let total = payload.len() as u64;
        assert_eq!(samples.first(), Some(&(0, total)));
        assert_eq!(samples.last(), Some(&(total, total)));
        for pair in samples.windows(2) {
            assert!(pair[0].0 <= pair[1].0);
        }
    }

    #[test]
    fn missing_file_fails_before_any_request() {
        let rt = tokio::runtime::Runtime::new().unwrap();
        let server = upload_server(&rt);

        let samples = Arc::new(Mutex::new(Vec::new()));
        let result = client_for(&server).upload_file(
            "1234",
            Path::new("/nonexistent/app.jar"),
            None,
            None,
            Box::new(Recorder(samples)),
        );
        assert!(result.is_err());

        let requests = rt.block_on(server.received_requests()).unwrap();
        assert!(requests.is_empty());
    }
}
