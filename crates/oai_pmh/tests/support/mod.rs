use std::{
    io::Write,
    net::SocketAddr,
    sync::{Arc, Mutex},
};

use tokio::{
    io::{AsyncReadExt, AsyncWriteExt},
    net::TcpListener,
    task::JoinHandle,
};

/// Serves exactly one canned HTTP response and yields the request target it saw.
pub struct StubRepository {
    pub addr: SocketAddr,
    handle: JoinHandle<String>,
}

impl StubRepository {
    pub async fn serve(status: &'static str, body: impl Into<Vec<u8>>) -> Self {
        let body = body.into();
        let listener = TcpListener::bind(("127.0.0.1", 0)).await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut buf = Vec::<u8>::new();
            loop {
                let mut tmp = [0u8; 1024];
                let n = socket.read(&mut tmp).await.unwrap();
                if n == 0 {
                    break;
                }
                buf.extend_from_slice(&tmp[..n]);
                if buf.windows(4).any(|w| w == b"\r\n\r\n") {
                    break;
                }
            }

            let head = String::from_utf8_lossy(&buf).into_owned();
            let request_line = head.lines().next().unwrap_or_default().to_string();

            let header = format!(
                "HTTP/1.1 {status}\r\nContent-Type: text/xml; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                body.len()
            );
            socket.write_all(header.as_bytes()).await.unwrap();
            socket.write_all(&body).await.unwrap();
            socket.flush().await.unwrap();

            // "GET /oai2?verb=Identify HTTP/1.1" -> "/oai2?verb=Identify"
            request_line
                .split_whitespace()
                .nth(1)
                .unwrap_or_default()
                .to_string()
        });

        Self { addr, handle }
    }

    pub fn endpoint(&self) -> String {
        format!("http://{}/oai2", self.addr)
    }

    pub async fn request_target(self) -> String {
        self.handle.await.unwrap()
    }
}

/// `io::Write` sink shared with a `tracing_subscriber` fmt layer.
#[derive(Clone, Default)]
pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

impl CapturedLogs {
    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for CapturedLogs {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}
