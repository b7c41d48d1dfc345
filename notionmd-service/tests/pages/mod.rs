//! Page operations: the document service, the HTTP routes and the socket front.

mod service;
