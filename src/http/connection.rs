use std::sync::Arc;

use bytes::BytesMut;
use tokio::io::AsyncReadExt;
use tokio::net::TcpStream;
use tracing::debug;

use crate::http::parser::parse_request;
use crate::http::request::{Method, Request};
use crate::http::response::Response;
use crate::http::route;
use crate::http::writer::ResponseWriter;
use crate::render::{RenderContext, TemplateResolver};

/// One accepted connection, owned by exactly one handler task.
///
/// The socket is released when the connection is dropped, on every exit
/// path of [`run`](Connection::run).
pub struct Connection<R> {
    stream: TcpStream,
    resolver: Arc<R>,
    read_budget: usize,
    state: ConnectionState,
}

pub enum ConnectionState {
    Reading,
    Dispatching(Request),
    Writing(ResponseWriter),
    Closed,
}

impl<R: TemplateResolver> Connection<R> {
    pub fn new(stream: TcpStream, resolver: Arc<R>, read_budget: usize) -> Self {
        Self {
            stream,
            resolver,
            read_budget,
            state: ConnectionState::Reading,
        }
    }

    pub async fn run(&mut self) -> anyhow::Result<()> {
        loop {
            match &mut self.state {
                ConnectionState::Reading => {
                    match self.read_request().await? {
                        Some(req) => {
                            self.state = ConnectionState::Dispatching(req);
                        }
                        None => {
                            // Peer closed without sending anything
                            self.state = ConnectionState::Closed;
                        }
                    }
                }

                ConnectionState::Dispatching(req) => {
                    let (response, send_body) = handle_request(req, self.resolver.as_ref());

                    let writer = ResponseWriter::new(&response, send_body);
                    self.state = ConnectionState::Writing(writer);
                }

                ConnectionState::Writing(writer) => {
                    writer.write_to_stream(&mut self.stream).await?;
                    self.state = ConnectionState::Closed;
                }

                ConnectionState::Closed => {
                    break;
                }
            }
        }

        Ok(())
    }

    /// Reads the request with a single bounded read.
    ///
    /// One read of up to `read_budget` bytes; larger requests are truncated,
    /// never reassembled. Returns `None` on a zero-byte read.
    async fn read_request(&mut self) -> anyhow::Result<Option<Request>> {
        let mut buf = BytesMut::with_capacity(self.read_budget);
        let n = self.stream.read_buf(&mut buf).await?;

        if n == 0 {
            return Ok(None);
        }

        let request =
            parse_request(&buf).map_err(|e| anyhow::anyhow!("HTTP parse error: {}", e))?;

        Ok(Some(request))
    }
}

/// Dispatches a parsed request into a response and a transmit-body flag.
///
/// The flag is false only for successful HEAD responses; error bodies are
/// transmitted regardless of method. Pure over its inputs so the dispatch
/// branches are testable without a socket.
pub fn handle_request<R>(req: &Request, resolver: &R) -> (Response, bool)
where
    R: TemplateResolver + ?Sized,
{
    match req.method {
        Method::GET | Method::HEAD => {
            let template = route::template_name(&req.path);
            let ctx = RenderContext::from_request(req);

            match resolver.render(&template, &ctx) {
                Ok(body) => {
                    let send_body = req.method == Method::GET;
                    (Response::ok(body), send_body)
                }
                Err(e) => {
                    debug!(template = %template, error = %e, "Template resolution failed, serving 404");
                    (Response::not_found(), true)
                }
            }
        }

        _ => (Response::method_not_allowed(), true),
    }
}
