#[api_group(tags("health"))]
#[rest_controller]
#[request_mapping("/api")]
pub struct HealthController;

impl HealthController {
    #[get_mapping("/ping")]
    #[api_operation("Liveness probe")]
    pub fn ping(&self) {}
}

#[api_group(tags("admin"))]
#[rest_controller]
pub struct AdminController;

impl AdminController {
    #[post_mapping("/api/ping")]
    #[api_operation("Trigger a ping")]
    pub fn ping(&self) {}

    #[request_mapping("/api/echo", method(GET, POST))]
    pub fn echo(&self, #[request_param] message: String) {}
}
