use testrail_client::prelude::*;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    setup_logger();
    info!("Starting simple client example");

    // TESTRAIL_URL, TESTRAIL_EMAIL and TESTRAIL_PASSWORD come from the environment or .env
    let api = TestRailApi::from_env()?;
    info!("Connected as {}", api.user_email());

    let projects = api
        .projects()
        .get_projects_bulk(&GetProjects {
            is_completed: Some(false),
            ..Default::default()
        })
        .await?;
    info!("Found {} active projects", projects.len());

    for project in &projects {
        info!("{} - {}", project["id"], project["name"]);
    }

    Ok(())
}
