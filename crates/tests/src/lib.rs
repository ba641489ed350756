#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;

#[cfg(test)]
mod report_list_tests;

#[cfg(test)]
mod report_detail_tests;

#[cfg(test)]
mod status_update_tests;

#[cfg(test)]
mod delete_report_tests;


#[cfg(test)]
mod lookup_tests;

#[cfg(test)]
mod error_mapping_tests;
