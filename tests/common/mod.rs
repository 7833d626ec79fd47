#![allow(dead_code)]

use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use gas_price_report::config::{AppConfig, ScrapingConfig, StationConfig};
use gas_price_report::notify::SendReport;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

/// Canned answer for one path.
#[derive(Clone)]
pub struct Page {
    pub status: u16,
    pub body: String,
}

impl Page {
    pub fn ok(body: impl Into<String>) -> Self {
        Self { status: 200, body: body.into() }
    }

    pub fn forbidden() -> Self {
        Self { status: 403, body: "<html><body>Forbidden</body></html>".to_string() }
    }
}

/// Minimal HTTP/1.1 server answering each request with the page registered for its path.
pub struct StationServer {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
    user_agents: Arc<Mutex<Vec<String>>>,
}

impl StationServer {
    pub async fn start(pages: HashMap<&'static str, Page>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let base_url = format!("http://{}", listener.local_addr().unwrap());
        let pages: HashMap<String, Page> = pages.into_iter().map(|(k, v)| (k.to_string(), v)).collect();
        let hits = Arc::new(AtomicUsize::new(0));
        let user_agents = Arc::new(Mutex::new(Vec::new()));

        let server_hits = hits.clone();
        let server_user_agents = user_agents.clone();
        tokio::spawn(async move {
            loop {
                let Ok((mut socket, _)) = listener.accept().await else {
                    break;
                };
                server_hits.fetch_add(1, Ordering::SeqCst);

                let mut request = Vec::new();
                let mut buf = [0u8; 4096];
                loop {
                    let n = socket.read(&mut buf).await.unwrap_or(0);
                    if n == 0 {
                        break;
                    }
                    request.extend_from_slice(&buf[..n]);
                    if request.windows(4).any(|w| w == b"\r\n\r\n") {
                        break;
                    }
                }
                let request = String::from_utf8_lossy(&request).to_string();

                let path = request.split_whitespace().nth(1).unwrap_or("/").to_string();
                if let Some(ua) = request
                    .lines()
                    .find_map(|l| l.strip_prefix("user-agent: ").or_else(|| l.strip_prefix("User-Agent: ")))
                {
                    server_user_agents.lock().unwrap().push(ua.to_string());
                }

                let page = pages.get(&path).cloned().unwrap_or(Page {
                    status: 404,
                    body: "not found".to_string(),
                });
                let reason = match page.status {
                    200 => "OK",
                    403 => "Forbidden",
                    404 => "Not Found",
                    _ => "Unknown",
                };
                let response = format!(
                    "HTTP/1.1 {} {}\r\nContent-Type: text/html\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                    page.status,
                    reason,
                    page.body.len(),
                    page.body
                );
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            }
        });

        Self { base_url, hits, user_agents }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn user_agents(&self) -> Vec<String> {
        self.user_agents.lock().unwrap().clone()
    }
}

pub fn price_page(prices: &[&str]) -> String {
    let displays: String = prices
        .iter()
        .map(|p| {
            format!(
                r#"<div class="GasPriceCollection-module__priceDisplay___1pnaL"><span class="FuelTypePriceDisplay-module__price___3iizb">${}</span></div>"#,
                p
            )
        })
        .collect();
    format!("<html><body><h1>Station</h1>{}</body></html>", displays)
}

pub fn station(url: String, nickname: &str, location: &str) -> StationConfig {
    StationConfig {
        url,
        nickname: nickname.to_string(),
        location: location.to_string(),
    }
}

pub fn config(data_file: &std::path::Path, stations: Vec<StationConfig>) -> AppConfig {
    AppConfig {
        base: Default::default(),
        file: gas_price_report::config::config::FileConfig {
            data_file: data_file.to_string_lossy().to_string(),
        },
        scraping: ScrapingConfig::default(),
        stations,
        smtp: Default::default(),
        report: gas_price_report::config::config::ReportConfig {
            recipients: vec!["someone@example.com".to_string()],
        },
    }
}

/// Keeps every message instead of sending it.
#[derive(Default)]
pub struct RecordingMailer {
    pub sent: Mutex<Vec<(String, String, Vec<String>)>>,
}

impl SendReport for RecordingMailer {
    async fn send_report(&self, subject: &str, body: &str, recipients: &[String]) -> anyhow::Result<()> {
        self.sent
            .lock()
            .unwrap()
            .push((subject.to_string(), body.to_string(), recipients.to_vec()));
        Ok(())
    }
}
