use std::sync::Arc;

use config::ConfigError;
use config::core_config::CoreConfig;
use model::user::User;
use proto::notice::NoticeBus;
use proto::retry::RetryPolicy;
use proto::session_store::SessionStore;
use provider::http_client::HttpClient;
use provider::http_client::reqwest_client::ReqwestClient;
use provider::loan_api_client::LoanApiClient;
use provider::loan_api_client::error::LoanApiClientError;
use provider::loan_api_client::http_client::HTTPLoanApiClient;
use provider::session_storage::SessionStorage;
use service::auth::AuthService;
use service::auth::dto::LoginRequestDTO;
use service::error::ServiceError;
use service::loan::LoanService;
use service::loan::view_model::LoanListViewModel;
use service::notification::NotificationService;
use service::user::UserService;
use service::verification::VerificationService;
use service::workflow::WorkflowController;
use service::workflow::tracker::VerificationStatusTracker;

pub mod config;
pub mod model;
pub mod proto;
pub mod provider;
pub mod service;
pub mod util;

pub struct LoanCore {
    pub config: Arc<CoreConfig>,
    pub session: Arc<SessionStore>,
    pub notices: NoticeBus,

    pub auth_service: AuthService,
    pub user_service: UserService,
    pub verification_service: VerificationService,
    pub loan_service: LoanService,
    pub notification_service: NotificationService,

    pub loan_list: Arc<LoanListViewModel>,
    pub workflow: Arc<WorkflowController>,
}

impl LoanCore {
    /// Wires the core against the remote loan service.
    ///
    /// Without `http_client` a reqwest client with the configured timeout is used.
    pub fn new(
        config: CoreConfig,
        session_storage: Arc<dyn SessionStorage>,
        http_client: Option<Arc<dyn HttpClient>>,
    ) -> Result<Self, ServiceError> {
        config.validate().map_err(ConfigError::from)?;

        let http_client = match http_client {
            Some(http_client) => http_client,
            None => Arc::new(
                ReqwestClient::with_timeout(config.api.timeout)
                    .map_err(|e| LoanApiClientError::Transport(e.into()))?,
            ),
        };

        let session = Arc::new(SessionStore::new(
            session_storage,
            config.session.storage_key.to_owned(),
        ));
        let loan_api_client = Arc::new(HTTPLoanApiClient::new(
            http_client,
            session.clone(),
            &config,
        ));

        Ok(Self::assemble(config, session, loan_api_client))
    }

    /// Wires the core against any [`LoanApiClient`] implementation.
    pub fn with_api_client(
        config: CoreConfig,
        session_storage: Arc<dyn SessionStorage>,
        loan_api_client: Arc<dyn LoanApiClient>,
    ) -> Self {
        let session = Arc::new(SessionStore::new(
            session_storage,
            config.session.storage_key.to_owned(),
        ));
        Self::assemble(config, session, loan_api_client)
    }

    /// Logs in, dropping whatever the screens still hold from a previous user
    pub async fn login(&self, request: LoginRequestDTO) -> Result<User, ServiceError> {
        self.reset_user_state();
        self.auth_service.login(request).await
    }

    pub async fn logout(&self) {
        self.reset_user_state();
        self.auth_service.logout().await;
    }

    fn reset_user_state(&self) {
        self.workflow.deactivate();
        self.loan_list.reset();
    }

    fn assemble(
        config: CoreConfig,
        session: Arc<SessionStore>,
        loan_api_client: Arc<dyn LoanApiClient>,
    ) -> Self {
        let retry = RetryPolicy::from(&config.query);
        let notices = NoticeBus::new();

        let verification_service = VerificationService::new(loan_api_client.clone(), retry);
        let loan_service = LoanService::new(loan_api_client.clone(), retry);
        let loan_list = Arc::new(LoanListViewModel::new(
            loan_service.clone(),
            notices.clone(),
        ));
        let workflow = Arc::new(WorkflowController::new(
            VerificationStatusTracker::new(
                verification_service.clone(),
                config.workflow.surface_status_errors,
            ),
            verification_service.clone(),
            loan_list.clone(),
            notices.clone(),
        ));

        Self {
            auth_service: AuthService::new(loan_api_client.clone(), session.clone()),
            user_service: UserService::new(loan_api_client.clone(), retry),
            notification_service: NotificationService::new(loan_api_client, retry),
            verification_service,
            loan_service,
            loan_list,
            workflow,
            notices,
            session,
            config: Arc::new(config),
        }
    }
}
