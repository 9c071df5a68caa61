//! Resource facades, one per API resource.

use reqwest::Method;

use crate::{
    client::{error::ClientError, gateway::ApiClient},
    model::{
        api::{DeletedDto, MessageDto},
        application::{
            ApplicationEnvelope, ApplicationsDto, CreateApplicationDto, StudentApplicationsDto,
            UpdateApplicationDto,
        },
        internship::{
            CreateInternshipDto, InternshipEnvelope, InternshipFilter, InternshipsDto,
            UpdateInternshipDto,
        },
        startup::{
            CreateStartupDto, StartupEnvelope, StartupFilter, StartupsDto, UpdateStartupDto,
        },
        student::{
            CreateStudentProfileDto, CurrentStudentDto, StudentProfileEnvelope,
            StudentProfileFilter, StudentProfilesDto, UpdateStudentProfileDto,
        },
        user::{LoginDto, SignupDto, UpdateUserDto, UserDetailEnvelope, UserEnvelope, UsersDto},
    },
};

impl ApiClient {
    pub fn users(&self) -> UsersApi<'_> {
        UsersApi { client: self }
    }

    pub fn students(&self) -> StudentsApi<'_> {
        StudentsApi { client: self }
    }

    pub fn startups(&self) -> StartupsApi<'_> {
        StartupsApi { client: self }
    }

    pub fn internships(&self) -> InternshipsApi<'_> {
        InternshipsApi { client: self }
    }

    pub fn applications(&self) -> ApplicationsApi<'_> {
        ApplicationsApi { client: self }
    }
}

/// `/users` routes
pub struct UsersApi<'a> {
    client: &'a ApiClient,
}

impl UsersApi<'_> {
    /// Create an account and store the returned user as the current identity
    pub async fn signup(&self, dto: &SignupDto) -> Result<UserEnvelope, ClientError> {
        let request = self.client.request(Method::POST, "/users/signup").json(dto);
        let envelope: UserEnvelope = self.client.send(request).await?;

        self.client.store().save(&envelope.user);

        Ok(envelope)
    }

    /// Log in and store the returned user as the current identity
    pub async fn login(&self, dto: &LoginDto) -> Result<UserEnvelope, ClientError> {
        let request = self.client.request(Method::POST, "/users/login").json(dto);
        let envelope: UserEnvelope = self.client.send(request).await?;

        self.client.store().save(&envelope.user);

        Ok(envelope)
    }

    /// End the server session and forget the stored identity
    ///
    /// The identity is cleared even when the request fails.
    pub async fn logout(&self) -> Result<MessageDto, ClientError> {
        let request = self.client.request(Method::POST, "/users/logout");
        let result = self.client.send(request).await;

        self.client.store().clear();

        result
    }

    pub async fn get_all(&self) -> Result<UsersDto, ClientError> {
        let request = self.client.request(Method::GET, "/users");

        self.client.send(request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<UserDetailEnvelope, ClientError> {
        let request = self.client.request(Method::GET, &format!("/users/{}", id));

        self.client.send(request).await
    }

    pub async fn update(&self, id: i32, dto: &UpdateUserDto) -> Result<UserEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::PUT, &format!("/users/{}", id))
            .json(dto);

        self.client.send(request).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedDto, ClientError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/users/{}", id));

        self.client.send(request).await
    }
}

/// `/students` routes
pub struct StudentsApi<'a> {
    client: &'a ApiClient,
}

impl StudentsApi<'_> {
    pub async fn create(
        &self,
        dto: &CreateStudentProfileDto,
    ) -> Result<StudentProfileEnvelope, ClientError> {
        let request = self.client.request(Method::POST, "/students").json(dto);

        self.client.send(request).await
    }

    pub async fn get_all(
        &self,
        filter: &StudentProfileFilter,
    ) -> Result<StudentProfilesDto, ClientError> {
        let request = self.client.request(Method::GET, "/students").query(filter);

        self.client.send(request).await
    }

    /// Profile of the stored identity
    pub async fn get_me(&self) -> Result<CurrentStudentDto, ClientError> {
        let request = self.client.request(Method::GET, "/students/me");

        self.client.send(request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<StudentProfileEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/students/{}", id));

        self.client.send(request).await
    }

    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<StudentProfileEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/students/user/{}", user_id));

        self.client.send(request).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateStudentProfileDto,
    ) -> Result<StudentProfileEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/students/{}", id))
            .json(dto);

        self.client.send(request).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedDto, ClientError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/students/{}", id));

        self.client.send(request).await
    }
}

/// `/startups` routes
pub struct StartupsApi<'a> {
    client: &'a ApiClient,
}

impl StartupsApi<'_> {
    pub async fn create(&self, dto: &CreateStartupDto) -> Result<StartupEnvelope, ClientError> {
        let request = self.client.request(Method::POST, "/startups").json(dto);

        self.client.send(request).await
    }

    pub async fn get_all(&self, filter: &StartupFilter) -> Result<StartupsDto, ClientError> {
        let request = self.client.request(Method::GET, "/startups").query(filter);

        self.client.send(request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<StartupEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/startups/{}", id));

        self.client.send(request).await
    }

    pub async fn get_by_user_id(&self, user_id: i32) -> Result<StartupsDto, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/startups/user/{}", user_id));

        self.client.send(request).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateStartupDto,
    ) -> Result<StartupEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/startups/{}", id))
            .json(dto);

        self.client.send(request).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedDto, ClientError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/startups/{}", id));

        self.client.send(request).await
    }
}

/// `/internships` routes
pub struct InternshipsApi<'a> {
    client: &'a ApiClient,
}

impl InternshipsApi<'_> {
    pub async fn create(
        &self,
        dto: &CreateInternshipDto,
    ) -> Result<InternshipEnvelope, ClientError> {
        let request = self.client.request(Method::POST, "/internships").json(dto);

        self.client.send(request).await
    }

    pub async fn get_all(&self, filter: &InternshipFilter) -> Result<InternshipsDto, ClientError> {
        let request = self
            .client
            .request(Method::GET, "/internships")
            .query(filter);

        self.client.send(request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<InternshipEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/internships/{}", id));

        self.client.send(request).await
    }

    pub async fn get_by_startup_id(&self, startup_id: i32) -> Result<InternshipsDto, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/internships/startup/{}", startup_id));

        self.client.send(request).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateInternshipDto,
    ) -> Result<InternshipEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/internships/{}", id))
            .json(dto);

        self.client.send(request).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedDto, ClientError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/internships/{}", id));

        self.client.send(request).await
    }
}

/// `/applications` routes
pub struct ApplicationsApi<'a> {
    client: &'a ApiClient,
}

impl ApplicationsApi<'_> {
    pub async fn create(
        &self,
        dto: &CreateApplicationDto,
    ) -> Result<ApplicationEnvelope, ClientError> {
        let request = self.client.request(Method::POST, "/applications").json(dto);

        self.client.send(request).await
    }

    pub async fn get_all(&self) -> Result<ApplicationsDto, ClientError> {
        let request = self.client.request(Method::GET, "/applications");

        self.client.send(request).await
    }

    pub async fn get_by_id(&self, id: i32) -> Result<ApplicationEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/applications/{}", id));

        self.client.send(request).await
    }

    pub async fn get_by_student_id(
        &self,
        student_id: i32,
    ) -> Result<StudentApplicationsDto, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/applications/student/{}", student_id));

        self.client.send(request).await
    }

    pub async fn get_by_startup_id(&self, startup_id: i32) -> Result<ApplicationsDto, ClientError> {
        let request = self
            .client
            .request(Method::GET, &format!("/applications/startup/{}", startup_id));

        self.client.send(request).await
    }

    pub async fn update(
        &self,
        id: i32,
        dto: &UpdateApplicationDto,
    ) -> Result<ApplicationEnvelope, ClientError> {
        let request = self
            .client
            .request(Method::PATCH, &format!("/applications/{}", id))
            .json(dto);

        self.client.send(request).await
    }

    pub async fn delete(&self, id: i32) -> Result<DeletedDto, ClientError> {
        let request = self
            .client
            .request(Method::DELETE, &format!("/applications/{}", id));

        self.client.send(request).await
    }
}
