use crate::structs::project_record::ProjectRecord;

/// Pure filter over the full project cache. A record passes when its name
/// or type contains the search term (case-insensitive) and, when a status
/// is given, its status matches exactly. Relative order is preserved, and
/// filtering always starts from the full cache so criteria never compound.
pub fn filter_projects(
    projects: &[ProjectRecord],
    search: &str,
    status: &str,
) -> Vec<ProjectRecord> {
    let term = search.to_lowercase();

    projects
        .iter()
        .filter(|project| {
            let matches_search = project.project_name.to_lowercase().contains(&term)
                || project.project_type.to_lowercase().contains(&term);
            let matches_status = status.is_empty() || project.status == status;
            matches_search && matches_status
        })
        .cloned()
        .collect()
}
