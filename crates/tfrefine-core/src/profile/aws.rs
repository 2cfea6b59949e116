//! AWS resource vocabulary, detection patterns, and placeholder templates.

use super::{CategorySpec, PlatformProfile};
use crate::domain::Platform;

pub(super) static PROFILE: PlatformProfile = PlatformProfile {
    platform: Platform::Aws,
    categories: CATEGORIES,
};

const CATEGORIES: &[CategorySpec] = &[
    CategorySpec {
        name: "VPC",
        config_pattern: Some(r"aws_vpc"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: VPC
resource "aws_vpc" "auto_generated" {
  cidr_block           = "10.0.0.0/16"
  enable_dns_support   = true
  enable_dns_hostnames = true
  tags = {
    Name = "auto-vpc"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "subnet",
        config_pattern: Some(r"aws_subnet"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: subnet
resource "aws_subnet" "auto_generated" {
  vpc_id                  = "vpc-xxxxxx" # Replace with a real vpc_id
  cidr_block              = "10.0.1.0/24"
  availability_zone       = "us-east-1a"
  map_public_ip_on_launch = true
  tags = {
    Name = "auto-subnet"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "NAT",
        config_pattern: Some(r"aws_nat_gateway"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: NAT
resource "aws_nat_gateway" "auto_generated" {
  allocation_id = "eipalloc-xxxxxx" # Replace with a valid allocation_id
  subnet_id     = "subnet-xxxxxx"   # Replace with a valid subnet_id
}"#,
        ),
    },
    CategorySpec {
        name: "security group",
        config_pattern: Some(r"aws_security_group"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: security group
resource "aws_security_group" "auto_generated" {
  name        = "auto-sg"
  description = "Auto-generated security group"
  vpc_id      = "vpc-xxxxxx" # Replace with a real vpc_id

  ingress {
    from_port   = 80
    to_port     = 80
    protocol    = "tcp"
    cidr_blocks = ["0.0.0.0/0"]
  }

  egress {
    from_port   = 0
    to_port     = 0
    protocol    = "-1"
    cidr_blocks = ["0.0.0.0/0"]
  }

  tags = {
    Name = "auto-sg"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "EKS",
        config_pattern: Some(r"aws_eks_"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: EKS
resource "aws_eks_cluster" "auto_generated" {
  name     = "auto-eks-cluster"
  role_arn = "arn:aws:iam::123456789012:role/eksClusterRole" # Replace with a valid role!
  vpc_config {
    subnet_ids = ["subnet-xxxxxxxx"] # Replace with real subnets!
  }
}"#,
        ),
    },
    CategorySpec {
        name: "ECS",
        config_pattern: Some(r"aws_ecs_"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: ECS
resource "aws_ecs_cluster" "auto_generated" {
  name = "auto-ecs-cluster"
}"#,
        ),
    },
    CategorySpec {
        name: "Fargate",
        config_pattern: Some(r"fargate"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Fargate
resource "aws_ecs_cluster" "auto_generated" {
  name = "auto-fargate-cluster"
}"#,
        ),
    },
    CategorySpec {
        name: "API Gateway",
        config_pattern: Some(r"aws_api_gateway_"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: API Gateway
resource "aws_api_gateway_rest_api" "auto_generated" {
  name        = "auto-api"
  description = "Auto-generated API Gateway"
}"#,
        ),
    },
    CategorySpec {
        name: "RDS",
        config_pattern: Some(r"aws_db_instance"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: RDS
resource "aws_db_instance" "auto_generated" {
  allocated_storage    = 20
  storage_type         = "gp2"
  engine               = "mysql"
  instance_class       = "db.t3.micro"
  name                 = "auto-db"
  username             = "admin"
  password             = "ChangeMe1234!"
  skip_final_snapshot  = true
}"#,
        ),
    },
    CategorySpec {
        name: "PostgreSQL",
        config_pattern: Some(r#"engine\s*=\s*"postgres""#),
        template: Some(
            r#"# Auto-generated placeholder - missing component: PostgreSQL
resource "aws_db_instance" "auto_generated_pg" {
  allocated_storage    = 20
  storage_type         = "gp2"
  engine               = "postgres"
  engine_version       = "13.7"
  instance_class       = "db.t3.micro"
  name                 = "autopg"
  username             = "admin"
  password             = "ChangeMe1234!"
  skip_final_snapshot  = true
}"#,
        ),
    },
    CategorySpec {
        name: "Aurora",
        config_pattern: Some(r"aurora"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Aurora
resource "aws_rds_cluster" "auto_generated" {
  cluster_identifier      = "auto-aurora-cluster"
  engine                 = "aurora-mysql"
  master_username         = "admin"
  master_password         = "ChangeMe1234!"
  skip_final_snapshot     = true
}"#,
        ),
    },
    CategorySpec {
        name: "SQS",
        config_pattern: Some(r"aws_sqs_queue"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: SQS
resource "aws_sqs_queue" "auto_generated" {
  name = "auto-queue"
}"#,
        ),
    },
    CategorySpec {
        name: "SNS",
        config_pattern: Some(r"aws_sns_topic"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: SNS
resource "aws_sns_topic" "auto_generated" {
  name = "auto-topic"
}"#,
        ),
    },
    CategorySpec {
        name: "Lambda",
        config_pattern: Some(r"aws_lambda_function"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Lambda
resource "aws_lambda_function" "auto_generated" {
  filename         = "function.zip"
  function_name    = "auto-lambda"
  role             = "arn:aws:iam::123456789012:role/auto-lambda-role" # Replace with a valid role!
  handler          = "index.handler"
  runtime          = "python3.9"
  source_code_hash = filebase64sha256("function.zip")
}"#,
        ),
    },
    CategorySpec {
        name: "Secrets Manager",
        config_pattern: Some(r"aws_secretsmanager_secret"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Secrets Manager
resource "aws_secretsmanager_secret" "auto_generated" {
  name        = "auto-secret"
  description = "Auto-generated secret"
}"#,
        ),
    },
    CategorySpec {
        name: "IAM",
        config_pattern: Some(r"aws_iam_"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: IAM
resource "aws_iam_role" "auto_generated" {
  name = "auto-role"
  assume_role_policy = jsonencode({
    Version = "2012-10-17",
    Statement = [{
      Effect = "Allow",
      Principal = {
        Service = "ec2.amazonaws.com"
      },
      Action = "sts:AssumeRole"
    }]
  })
}"#,
        ),
    },
    CategorySpec {
        name: "CloudWatch",
        config_pattern: Some(r"aws_cloudwatch_"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: CloudWatch
resource "aws_cloudwatch_log_group" "auto_generated" {
  name              = "auto-log-group"
  retention_in_days = 7
}"#,
        ),
    },
    CategorySpec {
        name: "X-Ray",
        config_pattern: Some(r"aws_xray_group"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: X-Ray
resource "aws_xray_group" "auto_generated" {
  group_name = "auto-xray-group"
}"#,
        ),
    },
    CategorySpec {
        name: "CloudFront",
        config_pattern: Some(r"aws_cloudfront_distribution"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: CloudFront
resource "aws_cloudfront_distribution" "auto_generated" {
  origin {
    domain_name = "auto-s3-bucket.s3.amazonaws.com"
    origin_id   = "S3-auto"
  }
  enabled             = true
  is_ipv6_enabled     = true
  default_root_object = "index.html"
  default_cache_behavior {
    allowed_methods  = ["GET", "HEAD"]
    cached_methods   = ["GET", "HEAD"]
    target_origin_id = "S3-auto"
    viewer_protocol_policy = "redirect-to-https"
    forwarded_values {
      query_string = false
      cookies {
        forward = "none"
      }
    }
  }
  restrictions {
    geo_restriction {
      restriction_type = "none"
    }
  }
  viewer_certificate {
    cloudfront_default_certificate = true
  }
}"#,
        ),
    },
    CategorySpec {
        name: "WAF",
        config_pattern: Some(r"aws_wafv2_web_acl"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: WAF
resource "aws_wafv2_web_acl" "auto_generated" {
  name        = "auto-waf"
  scope       = "REGIONAL"
  default_action {
    allow {}
  }
  visibility_config {
    cloudwatch_metrics_enabled = true
    metric_name                = "auto-waf"
    sampled_requests_enabled   = true
  }
}"#,
        ),
    },
    CategorySpec {
        name: "Backup",
        config_pattern: Some(r"aws_backup_"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: Backup
resource "aws_backup_vault" "auto_generated" {
  name = "auto-backup-vault"
}"#,
        ),
    },
    CategorySpec {
        name: "KMS",
        config_pattern: Some(r"aws_kms_key"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: KMS
resource "aws_kms_key" "auto_generated" {
  description             = "Auto-generated KMS key"
  deletion_window_in_days = 7
  enable_key_rotation     = true
}"#,
        ),
    },
    CategorySpec {
        name: "S3",
        config_pattern: Some(r"aws_s3_bucket"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: S3
resource "aws_s3_bucket" "auto_generated" {
  bucket = "auto-bucket-${random_id.suffix.hex}"
  acl    = "private"
  tags = {
    Name = "auto-bucket"
  }
}"#,
        ),
    },
    CategorySpec {
        name: "ALB",
        config_pattern: Some(r"aws_lb|aws_alb"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: ALB
resource "aws_lb" "auto_generated" {
  name               = "auto-alb"
  internal           = false
  load_balancer_type = "application"
  subnets            = ["subnet-xxxxxx"] # Replace with real subnets!
}"#,
        ),
    },
    CategorySpec {
        name: "ELB",
        config_pattern: Some(r"aws_elb"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: ELB
resource "aws_elb" "auto_generated" {
  name = "auto-elb"
  availability_zones = ["us-east-1a"]
  listener {
    instance_port     = 80
    instance_protocol = "http"
    lb_port           = 80
    lb_protocol       = "http"
  }
  health_check {
    target              = "HTTP:80/"
    interval            = 30
    healthy_threshold   = 2
    unhealthy_threshold = 2
    timeout             = 3
  }
}"#,
        ),
    },
    CategorySpec {
        name: "EC2 Instance",
        config_pattern: Some(r"aws_instance"),
        template: Some(
            r#"# Auto-generated placeholder - missing component: EC2 Instance
resource "aws_instance" "auto_generated" {
  ami           = "ami-0c55b159cbfafe1f0" # Example AMI for us-east-1
  instance_type = "t3.micro"
  tags = {
    Name = "auto-instance"
  }
}"#,
        ),
    },
];
