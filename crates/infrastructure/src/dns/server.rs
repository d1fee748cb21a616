use super::record_type_map::RecordTypeMapper;
use async_trait::async_trait;
use hickory_proto::op::{Header, ResponseCode};
use hickory_proto::rr::Record;
use hickory_server::authority::MessageResponseBuilder;
use hickory_server::server::{Request, RequestHandler, ResponseHandler, ResponseInfo};
use std::sync::Arc;
use tracing::{debug, error, info};
use zonestore_dns_application::ports::QueryResponder;
use zonestore_dns_application::use_cases::HandleDnsQueryUseCase;
use zonestore_dns_domain::{DnsRequest, DomainError};

/// Answers queries from the zone store and hands everything it cannot
/// answer to the next handler.
pub struct ZoneStoreHandler<N = ServFailHandler> {
    use_case: Arc<HandleDnsQueryUseCase>,
    next: N,
}

impl ZoneStoreHandler {
    pub fn new(use_case: Arc<HandleDnsQueryUseCase>) -> Self {
        Self::with_next(use_case, ServFailHandler)
    }
}

impl<N: RequestHandler> ZoneStoreHandler<N> {
    pub fn with_next(use_case: Arc<HandleDnsQueryUseCase>, next: N) -> Self {
        Self { use_case, next }
    }
}

#[async_trait]
impl<N: RequestHandler> RequestHandler for ZoneStoreHandler<N> {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        let request_info = match request.request_info() {
            Ok(info) => info,
            Err(e) => {
                error!(error = %e, "Failed to parse request info");
                return send_error_response(request, &mut response_handle, ResponseCode::FormErr)
                    .await;
            }
        };

        let query = &request_info.query;
        let hickory_record_type = query.query_type();
        let client_ip = request.src().ip();

        let record_type = match RecordTypeMapper::from_hickory(hickory_record_type) {
            Some(rt) => rt,
            None => {
                debug!(record_type = ?hickory_record_type, "Record type not served from store");
                return self.next.handle_request(request, response_handle).await;
            }
        };

        let dns_request = DnsRequest::new(query.name().to_string(), record_type, client_ip);
        info!(domain = %dns_request.domain, record_type = %record_type, client = %client_ip, "DNS query received");

        let mut responder = HickoryResponder::new(request, response_handle, &self.next);
        match self.use_case.serve(&dns_request, &mut responder).await {
            Ok(code) => {
                debug!(domain = %dns_request.domain, code = ?code, "Query served");
                responder.finish()
            }
            Err(e) => {
                error!(domain = %dns_request.domain, error = %e, "Failed to serve query");
                responder.fail(ResponseCode::ServFail).await
            }
        }
    }
}

/// Terminal handler: answers every query with SERVFAIL.
#[derive(Debug, Clone, Copy, Default)]
pub struct ServFailHandler;

#[async_trait]
impl RequestHandler for ServFailHandler {
    async fn handle_request<R: ResponseHandler>(
        &self,
        request: &Request,
        mut response_handle: R,
    ) -> ResponseInfo {
        send_error_response(request, &mut response_handle, ResponseCode::ServFail).await
    }
}

/// Bridges the resolution engine to a hickory response handle. The handle is
/// consumed by whichever of `write_reply` or `pass_through` succeeds first.
struct HickoryResponder<'a, R, N> {
    request: &'a Request,
    response_handle: Option<R>,
    next: &'a N,
    info: Option<ResponseInfo>,
}

impl<'a, R: ResponseHandler, N: RequestHandler> HickoryResponder<'a, R, N> {
    fn new(request: &'a Request, response_handle: R, next: &'a N) -> Self {
        Self {
            request,
            response_handle: Some(response_handle),
            next,
            info: None,
        }
    }

    fn take_handle(&mut self) -> Result<R, DomainError> {
        self.response_handle
            .take()
            .ok_or_else(|| DomainError::Reply("response already sent".to_string()))
    }

    fn finish(self) -> ResponseInfo {
        self.info
            .unwrap_or_else(|| ResponseInfo::from(*self.request.header()))
    }

    async fn fail(mut self, code: ResponseCode) -> ResponseInfo {
        match self.response_handle.take() {
            Some(mut handle) => send_error_response(self.request, &mut handle, code).await,
            None => self.finish(),
        }
    }
}

#[async_trait]
impl<'a, R: ResponseHandler, N: RequestHandler> QueryResponder for HickoryResponder<'a, R, N> {
    async fn write_reply(&mut self, answers: &[Record]) -> Result<(), DomainError> {
        let mut handle = self.take_handle()?;

        let builder = MessageResponseBuilder::from_message_request(self.request);
        let mut header = Header::response_from_request(self.request.header());
        header.set_authoritative(true);
        header.set_response_code(ResponseCode::NoError);
        let response = builder.build(header, answers.iter(), &[], &[], &[]);

        debug!(answers = answers.len(), "Sending response");
        match handle.send_response(response).await {
            Ok(info) => {
                self.info = Some(info);
                Ok(())
            }
            Err(e) => {
                error!(error = %e, "Failed to send response");
                // Keep the handle so the caller can still answer SERVFAIL.
                self.response_handle = Some(handle);
                Err(DomainError::Reply(e.to_string()))
            }
        }
    }

    async fn pass_through(&mut self) -> Result<ResponseCode, DomainError> {
        let handle = self.take_handle()?;
        let info = self.next.handle_request(self.request, handle).await;
        let code = info.response_code();
        self.info = Some(info);
        Ok(code)
    }
}

pub(crate) async fn send_error_response<R: ResponseHandler>(
    request: &Request,
    response_handle: &mut R,
    code: ResponseCode,
) -> ResponseInfo {
    debug!(code = ?code, "Sending error response");
    let builder = MessageResponseBuilder::from_message_request(request);
    let mut header = Header::response_from_request(request.header());
    header.set_response_code(code);
    let response = builder.build(header, &[], &[], &[], &[]);

    match response_handle.send_response(response).await {
        Ok(info) => info,
        Err(e) => {
            error!(error = %e, "Failed to send error response");
            ResponseInfo::from(*request.header())
        }
    }
}
