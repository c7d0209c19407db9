use super::test_support::mock::*;
use super::*;
use crate::models::{
    ApprovalRequestFilter, ApprovalStatus, EmployeeFilter, EmployeeInput, LeaveRequestFilter,
    LeaveRequestInput, LeaveStatus, ProjectAssignment, ProjectFilter, ProjectInput, Role,
};
use chrono::NaiveDate;
use serde_json::json;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn employee_json(id: i64, name: &str) -> serde_json::Value {
    json!({
        "id": id,
        "fullName": name,
        "subdivision": "Engineering",
        "position": "Employee",
        "peoplePartnerId": 2,
        "photo": null,
        "isActive": true,
        "outOfOfficeBalance": 20
    })
}

fn leave_json(id: i64, status: &str) -> serde_json::Value {
    json!({
        "id": id,
        "employeeId": 4,
        "employeeName": "Ivan Petrenko",
        "absenceReason": "Vacation",
        "startDate": "2024-07-01T00:00:00",
        "endDate": "2024-07-05T00:00:00",
        "comment": null,
        "status": status
    })
}

fn setup() -> (MockServer, ApiClient) {
    let server = MockServer::start();
    let client = ApiClient::new_with_base_url(server.url("/api"));
    (server, client)
}

#[tokio::test]
async fn list_employees_sends_filter_as_query() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(GET).path("/Employee");
        then.status(200)
            .json_body(json!([employee_json(1, "Ann Lee"), employee_json(2, "Bo Chan")]));
    });

    let filter = EmployeeFilter {
        subdivision: "Engineering".into(),
        ..EmployeeFilter::default()
    };
    let employees = client.list_employees(&filter).await.unwrap();
    assert_eq!(employees.len(), 2);

    let received = server.received();
    assert_eq!(received.len(), 1);
    assert_eq!(received[0].query_value("sortBy"), Some("fullName"));
    assert_eq!(received[0].query_value("subdivision"), Some("Engineering"));
    assert_eq!(received[0].query_value("outOfOfficeBalanceRight"), Some("365"));
    assert_eq!(received[0].query_value("isActive"), None);
}

#[tokio::test]
async fn employee_mutations_hit_expected_routes() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(POST).path("/Employee");
        then.status(201).json_body(employee_json(9, "New Hire"));
    });
    server.mock(|when, then| {
        when.method(PUT).path("/Employee");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(DELETE).path("/Employee/9");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(POST).path("/Employee/toggle-deactivate/9");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(POST).path("/Employee/assign-to-project");
        then.status(200);
    });

    let mut input = EmployeeInput {
        id: None,
        full_name: "New Hire".into(),
        subdivision: "HR".into(),
        position: "Employee".into(),
        people_partner_id: Some(2),
        is_active: true,
        out_of_office_balance: 20.0,
    };
    client.create_employee(&input).await.unwrap();
    input.id = Some(9);
    client.update_employee(&input).await.unwrap();
    client.toggle_employee_active(9).await.unwrap();
    client
        .assign_employee_to_project(ProjectAssignment {
            employee_id: 9,
            project_id: 3,
        })
        .await
        .unwrap();
    client.delete_employee(9).await.unwrap();

    let received = server.received();
    assert_eq!(received[0].body.as_ref().unwrap()["fullName"], "New Hire");
    assert_eq!(received[1].body.as_ref().unwrap()["id"], 9);
    assert_eq!(
        received[3].body,
        Some(json!({ "employeeId": 9, "projectId": 3 }))
    );
    assert_eq!(server.hits(DELETE, "/Employee/9"), 1);
}

#[tokio::test]
async fn update_employee_without_id_is_rejected_locally() {
    let (server, client) = setup();
    let input = EmployeeInput {
        id: None,
        full_name: "Nobody".into(),
        subdivision: String::new(),
        position: "Employee".into(),
        people_partner_id: None,
        is_active: true,
        out_of_office_balance: 0.0,
    };
    let err = client.update_employee(&input).await.unwrap_err();
    assert!(err.is_validation());
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn upload_photo_posts_multipart() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(POST).path("/Employee/upload-photo/4");
        then.status(200);
    });
    client
        .upload_employee_photo(4, "avatar.png", vec![137, 80, 78, 71])
        .await
        .unwrap();
    assert_eq!(server.hits(POST, "/Employee/upload-photo/4"), 1);
}

#[tokio::test]
async fn lookup_lists_and_role_resolution() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(GET).path("/Employee/get-hrs");
        then.status(200).json_body(json!([employee_json(2, "Olena")]));
    });
    server.mock(|when, then| {
        when.method(GET).path("/Employee/get-project-managers");
        then.status(200).json_body(json!([employee_json(3, "Taras")]));
    });
    server.mock(|when, then| {
        when.method(GET)
            .path("/Employee/get-user-role")
            .query_param("fullName", "Olena")
            .query_param("position", "HR Manager");
        then.status(200)
            .json_body(json!({ "id": 2, "fullName": "Olena", "position": "HR Manager" }));
    });

    assert_eq!(client.list_hr_managers().await.unwrap()[0].id, 2);
    assert_eq!(client.list_project_managers().await.unwrap()[0].id, 3);
    let resolved = client
        .resolve_user_role(" Olena ", Role::HrManager)
        .await
        .unwrap();
    assert_eq!(resolved.id, 2);
    assert_eq!(resolved.position, "HR Manager");
}

#[tokio::test]
async fn project_endpoints() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(GET).path("/Projects");
        then.status(200).json_body(json!([{
            "id": 3, "projectType": "Research", "startDate": "2024-02-01T00:00:00",
            "endDate": null, "projectManagerId": 3, "projectManagerName": "Taras",
            "comment": null, "status": true
        }]));
    });
    server.mock(|when, then| {
        when.method(PATCH).path("/Projects/3/deactivate");
        then.status(204);
    });
    server.mock(|when, then| {
        when.method(POST).path("/Projects");
        then.status(200);
    });

    let filter = ProjectFilter::starting(date(2024, 6, 15)).assigned_to(Some(4));
    let projects = client.list_projects(&filter).await.unwrap();
    assert_eq!(projects[0].start_date, date(2024, 2, 1));
    client.deactivate_project(3).await.unwrap();
    client
        .create_project(&ProjectInput {
            id: None,
            project_type: "Design".into(),
            start_date: date(2024, 8, 1),
            end_date: Some(date(2024, 12, 1)),
            project_manager_id: 3,
            comment: None,
            status: true,
        })
        .await
        .unwrap();

    let received = server.received();
    assert_eq!(received[0].query_value("assignedEmployeeId"), Some("4"));
    assert_eq!(received[0].query_value("startDateFrom"), Some("2023-07-15"));
    assert_eq!(received[2].body.as_ref().unwrap()["endDate"], "2024-12-01");
}

#[tokio::test]
async fn leave_request_endpoints() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(GET).path("/LeaveRequest");
        then.status(200).json_body(json!([leave_json(31, "New")]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/LeaveRequest/submit-leave-request/31");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(POST).path("/LeaveRequest/cancel-leave-request/31");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(PUT).path("/LeaveRequest/31");
        then.status(200);
    });

    let rows = client
        .list_leave_requests(&LeaveRequestFilter::starting(date(2024, 6, 15)))
        .await
        .unwrap();
    assert_eq!(rows[0].status, LeaveStatus::New);

    client.submit_leave_request(31).await.unwrap();
    client.cancel_leave_request(31).await.unwrap();
    client
        .update_leave_request(&LeaveRequestInput {
            id: Some(31),
            employee_id: 4,
            absence_reason: "Other".into(),
            start_date: date(2024, 7, 1),
            end_date: date(2024, 7, 2),
            comment: None,
        })
        .await
        .unwrap();
    assert_eq!(server.hits(PUT, "/LeaveRequest/31"), 1);
}

#[tokio::test]
async fn approval_endpoints_send_reject_comment_as_json_string() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(GET).path("/ApprovalRequest");
        then.status(200).json_body(json!([{
            "id": 8, "leaveRequestId": 31, "status": "New", "employeeName": "Ivan"
        }]));
    });
    server.mock(|when, then| {
        when.method(POST).path("/ApprovalRequest/approve/8");
        then.status(200);
    });
    server.mock(|when, then| {
        when.method(POST).path("/ApprovalRequest/reject/8");
        then.status(200);
    });

    let rows = client
        .list_approval_requests(&ApprovalRequestFilter::default())
        .await
        .unwrap();
    assert_eq!(rows[0].status, ApprovalStatus::New);
    client.approve_request(8).await.unwrap();
    client.reject_request(8, " Team offsite ").await.unwrap();

    let received = server.received();
    assert_eq!(received[2].body, Some(json!("Team offsite")));
}

#[tokio::test]
async fn reject_without_comment_never_reaches_server() {
    let (server, client) = setup();
    let err = client.reject_request(8, "   ").await.unwrap_err();
    assert!(err.is_validation());
    assert!(server.received().is_empty());
}

#[tokio::test]
async fn server_errors_surface_message_field() {
    let (server, client) = setup();
    server.mock(|when, then| {
        when.method(DELETE).path("/Projects/3");
        then.status(400)
            .json_body(json!({ "message": "Project has assigned employees" }));
    });
    let err = client.delete_project(3).await.unwrap_err();
    assert_eq!(err.error, "Project has assigned employees");
    assert_eq!(err.code, "HTTP_400");
}

#[tokio::test]
async fn unmatched_route_is_an_error_not_a_panic() {
    let (_server, client) = setup();
    let err = client.get_project(404).await.unwrap_err();
    assert!(err.error.contains("No mock for GET /Projects/404"));
}
