use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

pub const FIRST_PAGE: &str = "/top-100-richest-bitcoin-addresses.html";

pub fn page_path(page_num: usize) -> String {
    if page_num <= 1 {
        FIRST_PAGE.to_string()
    } else {
        format!("/top-100-richest-bitcoin-addresses-{page_num}.html")
    }
}

/// A local copy of the ranking site, served over plain HTTP/1.1.
pub struct TestSite {
    pub base_url: String,
    hits: Arc<AtomicUsize>,
}

impl TestSite {
    /// Number of requests the site has answered so far.
    pub fn hits(&self) -> usize {
        self.hits.load(Ordering::SeqCst)
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

/// Serves `pages` (path -> html) on an ephemeral port. Unknown paths get a 404.
pub async fn serve(pages: HashMap<String, String>) -> TestSite {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let pages = Arc::new(pages);
    let hits = Arc::new(AtomicUsize::new(0));

    tokio::spawn({
        let hits = hits.clone();
        async move {
            while let Ok((stream, _)) = listener.accept().await {
                let pages = pages.clone();
                let hits = hits.clone();
                tokio::spawn(async move { answer(stream, &pages, &hits).await });
            }
        }
    });

    TestSite {
        base_url: format!("http://{addr}"),
        hits,
    }
}

async fn answer(mut stream: TcpStream, pages: &HashMap<String, String>, hits: &AtomicUsize) {
    let mut head = Vec::new();
    let mut chunk = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        match stream.read(&mut chunk).await {
            Ok(0) | Err(_) => return,
            Ok(n) => head.extend_from_slice(&chunk[..n]),
        }
    }
    hits.fetch_add(1, Ordering::SeqCst);

    let head = String::from_utf8_lossy(&head);
    let path = head.split_whitespace().nth(1).unwrap_or("/");
    let (status, body) = match pages.get(path) {
        Some(html) => ("200 OK", html.as_str()),
        None => ("404 Not Found", ""),
    };

    let response = format!(
        "HTTP/1.1 {status}\r\nContent-Type: text/html; charset=utf-8\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{body}",
        body.len()
    );
    let _ = stream.write_all(response.as_bytes()).await;
    let _ = stream.shutdown().await;
}

/// One page of the ranking: ranks `first_rank..first_rank + 100`, split over
/// `tblOne` (with header and body) and `tblOne2` (rows only).
pub fn ranking_page(first_rank: u64) -> String {
    let rows = |ranks: std::ops::Range<u64>| {
        ranks
            .map(|rank| {
                format!(
                    "<tr><td>{rank}</td>\
                     <td><a href=\"/bitcoin/address/bc1q{rank:08}\">bc1q{rank:08}</a> wallet: {rank}</td>\
                     <td>{},{:03}.25 BTC ($1,234,567)</td>\
                     <td>0.01%</td></tr>",
                    20_000 - rank,
                    rank % 1000
                )
            })
            .collect::<String>()
    };

    format!(
        "<!DOCTYPE html><html><head><title>Top 100 Richest Bitcoin Addresses</title></head><body>\
         <table id=\"tblOne\" class=\"table\">\
         <thead><tr><th></th><th>Address</th><th>Balance</th><th>% of coins</th></tr></thead>\
         <tbody>{}</tbody></table>\
         <table id=\"tblOne2\" class=\"table\">{}</table>\
         </body></html>",
        rows(first_rank..first_rank + 50),
        rows(first_rank + 50..first_rank + 100)
    )
}

/// The first `num_pages` pages of the ranking.
pub fn ranking_site(num_pages: usize) -> HashMap<String, String> {
    (1..=num_pages)
        .map(|page| (page_path(page), ranking_page((page as u64 - 1) * 100 + 1)))
        .collect()
}
