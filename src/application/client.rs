/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use crate::application::config::Config;
use crate::application::services::{
    Attachments, CaseFields, CaseTypes, Cases, Configurations, Datasets, Groups, Labels,
    Milestones, Plans, Priorities, Projects, Reports, ResultFields, Results, Roles, Runs,
    Sections, SharedSteps, Statuses, Suites, Templates, Tests, Users, Variables,
};
use crate::error::TestRailResult;
use crate::session::{Session, SessionBuilder};

/// Client for the TestRail API
///
/// Owns one [`Session`] and hands out one borrowed view per endpoint
/// category:
///
/// ```rust,no_run
/// # use testrail_client::prelude::*;
/// # async fn run() -> Result<(), AppError> {
/// let api = TestRailApi::from_env()?;
/// let case = api.cases().get_case(1).await?;
/// # let _ = case;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct TestRailApi {
    session: Session,
}

impl From<Session> for TestRailApi {
    fn from(session: Session) -> Self {
        Self { session }
    }
}

impl TestRailApi {
    /// Wraps an existing session
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    /// Starts building a client; every session option is available
    pub fn builder() -> SessionBuilder<Self> {
        SessionBuilder::new()
    }

    /// Creates a client from a complete configuration
    pub fn with_config(config: Config) -> TestRailResult<Self> {
        Self::builder().config(config).build()
    }

    /// Creates a client from `TESTRAIL_*` environment variables and `.env`
    pub fn from_env() -> TestRailResult<Self> {
        Session::from_env().map(Self::new)
    }

    /// The underlying session, for endpoints not covered by the categories
    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Email of the authenticated user
    pub fn user_email(&self) -> &str {
        self.session.user_email()
    }

    pub fn attachments(&self) -> Attachments<'_> {
        Attachments::new(&self.session)
    }

    pub fn cases(&self) -> Cases<'_> {
        Cases::new(&self.session)
    }

    pub fn case_fields(&self) -> CaseFields<'_> {
        CaseFields::new(&self.session)
    }

    pub fn case_types(&self) -> CaseTypes<'_> {
        CaseTypes::new(&self.session)
    }

    pub fn configurations(&self) -> Configurations<'_> {
        Configurations::new(&self.session)
    }

    pub fn datasets(&self) -> Datasets<'_> {
        Datasets::new(&self.session)
    }

    pub fn groups(&self) -> Groups<'_> {
        Groups::new(&self.session)
    }

    pub fn labels(&self) -> Labels<'_> {
        Labels::new(&self.session)
    }

    pub fn milestones(&self) -> Milestones<'_> {
        Milestones::new(&self.session)
    }

    pub fn plans(&self) -> Plans<'_> {
        Plans::new(&self.session)
    }

    pub fn priorities(&self) -> Priorities<'_> {
        Priorities::new(&self.session)
    }

    pub fn projects(&self) -> Projects<'_> {
        Projects::new(&self.session)
    }

    pub fn reports(&self) -> Reports<'_> {
        Reports::new(&self.session)
    }

    pub fn results(&self) -> Results<'_> {
        Results::new(&self.session)
    }

    pub fn result_fields(&self) -> ResultFields<'_> {
        ResultFields::new(&self.session)
    }

    pub fn roles(&self) -> Roles<'_> {
        Roles::new(&self.session)
    }

    pub fn runs(&self) -> Runs<'_> {
        Runs::new(&self.session)
    }

    pub fn sections(&self) -> Sections<'_> {
        Sections::new(&self.session)
    }

    pub fn shared_steps(&self) -> SharedSteps<'_> {
        SharedSteps::new(&self.session)
    }

    pub fn statuses(&self) -> Statuses<'_> {
        Statuses::new(&self.session)
    }

    pub fn suites(&self) -> Suites<'_> {
        Suites::new(&self.session)
    }

    pub fn templates(&self) -> Templates<'_> {
        Templates::new(&self.session)
    }

    pub fn tests(&self) -> Tests<'_> {
        Tests::new(&self.session)
    }

    pub fn users(&self) -> Users<'_> {
        Users::new(&self.session)
    }

    pub fn variables(&self) -> Variables<'_> {
        Variables::new(&self.session)
    }
}
