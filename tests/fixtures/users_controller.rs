pub struct UserList;

#[api_group(tags("users"))]
#[rest_controller]
#[request_mapping("/api")]
pub struct UserController;

impl UserController {
    #[get_mapping("/list")]
    #[api_operation("List users")]
    #[api_param("the user id")]
    pub fn list(&self, #[path_variable] id: String) -> UserList {
        UserList
    }

    #[post_mapping("/users")]
    pub fn create(&self, #[request_body] payload: UserForm, request: HttpRequest) -> UserList {
        UserList
    }

    #[put_mapping("/users")]
    pub fn replace(&self, #[request_param] page: u32, body: String) -> UserList {
        UserList
    }

    #[delete_mapping("/users")]
    pub fn remove(&self, #[path_variable] id: String) -> UserList {
        UserList
    }

    pub fn not_a_route(&self) {}

    #[get_mapping("/internal")]
    fn private_route(&self) {}
}

#[api_group(tags("files"))]
#[rest_controller]
pub struct UploadController;

impl UploadController {
    #[post_mapping("/upload")]
    pub fn upload(&self, attachment: MultipartFile, #[request_param] label: String) {}
}

// Group-annotated but not a controller: must never reach the document.
#[api_group(tags("ghost"))]
pub struct GhostService;

impl GhostService {
    #[get_mapping("/ghost")]
    pub fn haunt(&self) {}
}
