//! Logger module
//!
//! Timestamped logging for the local file server. Info and access lines go
//! to stdout, errors and warnings to stderr. The component is
//! configuration-free by contract, so there are no log files to manage.

use chrono::Local;
use std::net::SocketAddr;

fn timestamp() -> String {
    Local::now().format("%Y-%m-%d %H:%M:%S%.3f").to_string()
}

fn write_info(message: &str) {
    println!("[{}] {message}", timestamp());
}

fn write_error(message: &str) {
    eprintln!("[{}] {message}", timestamp());
}

pub fn log_server_start(addr: &SocketAddr) {
    write_info("======================================");
    write_info("Local file server started");
    write_info(&format!("Listening on: http://{addr}"));
    write_info("Serving /viewer (bundled assets) and /files (local files)");
    write_info("======================================");
}

pub fn log_request(method: &hyper::Method, path: &str) {
    write_info(&format!("[Request] {method} {path}"));
}

pub fn log_response(status: u16) {
    write_info(&format!("[Response] {status}"));
}

pub fn log_connection_error(err: &impl std::fmt::Debug) {
    write_error(&format!("[ERROR] Failed to serve connection: {err:?}"));
}

pub fn log_error(message: &str) {
    write_error(&format!("[ERROR] {message}"));
}

pub fn log_warning(message: &str) {
    write_error(&format!("[WARN] {message}"));
}
