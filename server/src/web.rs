// © 2022-2024 Jacob Riddle (ElementalAlchemist)
//
// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

use super::file_types::get_media_type;
use async_std::fs;
use async_std::io::ErrorKind;
use async_std::path::{Path, PathBuf};
use async_std::sync::Arc;
use http_types::mime;
use mindful_event_shared::SITE_CONFIG_PATH;
use tide::{Request, Response, Server, StatusCode};

const INDEX_FILE: &str = "index.html";

pub fn add_routes(app: &mut Server<()>, static_directory: PathBuf, site_config_json: String) {
	let static_directory = Arc::new(static_directory);
	let site_config_json = Arc::new(site_config_json);

	app.at(SITE_CONFIG_PATH).get({
		let site_config_json = Arc::clone(&site_config_json);
		move |request| site_config(request, Arc::clone(&site_config_json))
	});
	app.at("/").get({
		let static_directory = Arc::clone(&static_directory);
		move |request| serve_static(request, Arc::clone(&static_directory))
	});
	app.at("/*path").get({
		let static_directory = Arc::clone(&static_directory);
		move |request| serve_static(request, Arc::clone(&static_directory))
	});
}

/// GET /site-config.json
///
/// Responds with the [SiteConfig](mindful_event_shared::config::SiteConfig) built from the configuration file.
async fn site_config(_request: Request<()>, site_config_json: Arc<String>) -> tide::Result {
	Ok(Response::builder(StatusCode::Ok)
		.body(site_config_json.as_str())
		.content_type(mime::JSON)
		.build())
}

/// Turns a URL path into a path relative to the static directory, refusing anything that would climb out of it.
pub fn sanitize_request_path(url_path: &str) -> Option<PathBuf> {
	let mut relative_path = PathBuf::new();
	for segment in url_path.split('/') {
		match segment {
			"" | "." => (),
			".." => return None,
			segment if segment.contains('\\') => return None,
			segment => relative_path.push(segment),
		}
	}
	Some(relative_path)
}

/// Paths without a file extension are views the client routes itself, so they all get the client's entry page.
fn is_client_route(relative_path: &Path) -> bool {
	relative_path.extension().is_none()
}

/// Finds the file on disk that answers a request for the given relative path.
pub async fn resolve_file(static_directory: &Path, relative_path: &Path) -> PathBuf {
	let mut file_path = static_directory.join(relative_path);
	if file_path.is_dir().await {
		file_path.push(INDEX_FILE);
		return file_path;
	}
	if !file_path.exists().await && is_client_route(relative_path) {
		return static_directory.join(INDEX_FILE);
	}
	file_path
}

async fn serve_static(request: Request<()>, static_directory: Arc<PathBuf>) -> tide::Result {
	let Some(relative_path) = sanitize_request_path(request.url().path()) else {
		return Ok(Response::new(StatusCode::BadRequest));
	};
	let file_path = resolve_file(&static_directory, &relative_path).await;

	match fs::read(&file_path).await {
		Ok(contents) => {
			let mut response = Response::new(StatusCode::Ok);
			response.insert_header("Content-Type", get_media_type(&file_path));
			response.set_body(contents);
			Ok(response)
		}
		Err(error) => match error.kind() {
			ErrorKind::NotFound => Ok(Response::new(StatusCode::NotFound)),
			ErrorKind::PermissionDenied => Ok(Response::new(StatusCode::Forbidden)),
			_ => {
				tide::log::error!("Failed to read {}: {}", file_path.display(), error);
				Ok(Response::new(StatusCode::InternalServerError))
			}
		},
	}
}
