use crate::{
    domain::{project::Project, types::ProjectId},
    models::{ListResponse, project::Project as ApiProject},
    repository::{ApiRepository, ListQuery, ProjectReader, errors::RepositoryResult},
};

impl ProjectReader for ApiRepository {
    async fn list_projects(&self, query: ListQuery) -> RepositoryResult<Vec<Project>> {
        let projects: ListResponse<ApiProject> = self.get_list("/api/projects", &query).await?;
        Ok(projects.into_items().into_iter().map(Into::into).collect())
    }

    async fn get_project_by_id(&self, id: &ProjectId) -> RepositoryResult<Project> {
        let project: ApiProject = self.get(&format!("/api/projects/{id}")).await?;
        Ok(project.into())
    }
}
